//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `tfa_core`:
//!
//! - **Database**: MySQL repositories for methods, the global configuration,
//!   pages and layout slots, using SQLx
//! - **Filesystem**: local-disk template asset store on `tokio::fs`
//! - **Settings**: layered configuration loading (`.env`, config file, environment)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use std::path::PathBuf;

use tfa_core::errors::DomainError;

// Re-export core types for convenience
pub use tfa_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Filesystem module - template asset store on the local disk
pub mod filesystem;

/// Settings module - layered configuration loading
pub mod settings;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            #[cfg(feature = "mysql")]
            InfrastructureError::Database(e) => DomainError::storage(e),
            InfrastructureError::Io { path, source } => DomainError::filesystem(&path, source),
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_filesystem() {
        let err = InfrastructureError::Io {
            path: PathBuf::from("/theme/TwoFactorAuthCustomerSms42"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let domain: DomainError = err.into();
        match domain {
            DomainError::Filesystem { path, message } => {
                assert_eq!(path, "/theme/TwoFactorAuthCustomerSms42");
                assert!(message.contains("denied"));
            }
            other => panic!("Expected filesystem error, got {other:?}"),
        }
    }

    #[test]
    fn test_general_error_maps_to_internal() {
        let domain: DomainError = InfrastructureError::General("boom".to_string()).into();
        assert!(matches!(domain, DomainError::Internal { .. }));
    }
}
