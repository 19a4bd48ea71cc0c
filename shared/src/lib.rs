//! Shared configuration and ambient utilities for the SMS two-factor plugin
//!
//! This crate provides functionality used by every other crate in the workspace:
//! - Configuration types (plugin paths, database, environment, logging)
//! - Logging bootstrap on top of `tracing-subscriber`

pub mod config;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, LogFormat, LoggingConfig, PluginConfig, Settings};
