//! Plugin lifecycle orchestration
//!
//! This module ties the method registry, template asset installer and page
//! registrar together into the three operations the host plugin manager
//! invokes: enable, disable and uninstall.

mod config;
mod controller;
mod types;


pub use config::LifecycleConfig;
pub use controller::LifecycleController;
pub use types::{LifecycleState, LifecycleStep};
