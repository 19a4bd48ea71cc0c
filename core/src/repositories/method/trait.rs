//! Method repository trait defining the interface for two-factor method persistence.

use async_trait::async_trait;

use crate::domain::entities::method::TwoFactorAuthMethod;
use crate::errors::DomainError;

/// Repository trait for [`TwoFactorAuthMethod`] persistence operations
///
/// Records are keyed by their unique `name`. Every write must be durable
/// before the returned future resolves.
#[async_trait]
pub trait MethodRepository: Send + Sync {
    /// Find a method by its unique name
    ///
    /// # Returns
    /// * `Ok(Some(method))` - Method found
    /// * `Ok(None)` - No method registered under `name`
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_name(&self, name: &str) -> Result<Option<TwoFactorAuthMethod>, DomainError>;

    /// Insert or update a method, matching existing rows by name
    ///
    /// # Returns
    /// * `Ok(method)` - The stored method with its identifier set
    /// * `Err(DomainError)` - Storage error occurred
    async fn upsert(&self, method: TwoFactorAuthMethod) -> Result<TwoFactorAuthMethod, DomainError>;

    /// Count stored methods
    async fn count(&self) -> Result<u64, DomainError>;
}
