//! Domain layer containing the records the plugin registers with the host platform.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
