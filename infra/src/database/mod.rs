//! Database module - MySQL implementations using SQLx
//!
//! This module provides the durable storage behind the core repository ports:
//! - Connection pool management
//! - Repository implementations over the host platform's tables

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlGlobalConfigRepository, MySqlMethodRepository, MySqlPageLayoutRepository,
    MySqlPageRepository,
};
