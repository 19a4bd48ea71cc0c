//! Page layout slot repository module.

mod r#trait;
pub use r#trait::PageLayoutRepository;

mod mock;
pub use mock::MockPageLayoutRepository;
