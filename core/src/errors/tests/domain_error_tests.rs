//! Unit tests for domain error types

use std::path::Path;

use crate::errors::DomainError;

#[test]
fn test_filesystem_error_names_path() {
    let error = DomainError::filesystem(Path::new("/theme/TwoFactorAuthCustomerSms42"), "permission denied");
    let message = error.to_string();
    assert!(message.contains("/theme/TwoFactorAuthCustomerSms42"));
    assert!(message.contains("permission denied"));
}

#[test]
fn test_storage_error_message() {
    let error = DomainError::storage("connection refused");
    assert_eq!(error.to_string(), "Storage error: connection refused");
    assert!(!error.is_not_found());
}

#[test]
fn test_not_found_is_distinguishable() {
    let error = DomainError::not_found("Layout 2");
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Resource not found: Layout 2");
}
