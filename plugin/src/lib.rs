//! # SMS Two-Factor Plugin
//!
//! Host-facing surface of the plugin:
//!
//! - [`PluginManager`]: the `enable`, `disable` and `uninstall` entry points
//!   the host plugin manager invokes
//! - [`PluginContext`]: the explicit collaborators each entry point runs with
//! - [`event`]: the template hook extending the admin customer edit screen

pub mod context;
pub mod event;
pub mod manager;
pub mod meta;

pub use context::PluginContext;
pub use event::{AdminCustomerEditHook, EventDispatcher, EventSubscriber, TemplateEvent};
pub use manager::PluginManager;
pub use meta::PluginMeta;
