//! Storage ports for the records the plugin owns.
//!
//! Each entity gets a narrow async repository trait. The in-memory `Mock*`
//! implementations back the unit and lifecycle tests; the durable MySQL
//! implementations live in the infrastructure crate.

pub mod global_config;
pub mod method;
pub mod page;
pub mod page_layout;

pub use global_config::{GlobalConfigRepository, MockGlobalConfigRepository};
pub use method::{MockMethodRepository, MethodRepository};
pub use page::{MockPageRepository, PageRepository};
pub use page_layout::{MockPageLayoutRepository, PageLayoutRepository};
