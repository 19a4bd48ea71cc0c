//! # SMS Two-Factor Core
//!
//! Domain layer for the SMS two-factor authentication plugin.
//! This crate contains the entities the plugin registers with the host platform,
//! the storage and asset ports they are persisted through, the services that
//! register and remove them, and the domain error types.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{
    PageDescriptor, TwoFactorAuthGlobalConfig, TwoFactorAuthMethod, SMS_METHOD_NAME,
};
pub use errors::{DomainError, DomainResult};
pub use services::{
    AssetStore, LifecycleConfig, LifecycleController, LifecycleState, MethodRegistry,
    PageRegistrar, TemplateAssetInstaller,
};
