//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Storage and filesystem failures are never handled inside the domain layer;
/// they travel up to the host plugin manager, which reports them to the operator.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Filesystem error at {path}: {message}")]
    Filesystem { path: String, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Build a storage error from any displayable cause
    pub fn storage(message: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }

    /// Build a filesystem error for `path`
    pub fn filesystem(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        Self::Filesystem {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Build a not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Whether this error describes an absent record rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
