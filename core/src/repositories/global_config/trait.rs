//! Repository trait for the singleton two-factor configuration.

use async_trait::async_trait;

use crate::domain::entities::global_config::TwoFactorAuthGlobalConfig;
use crate::errors::DomainError;

/// Repository trait for [`TwoFactorAuthGlobalConfig`]
///
/// The configuration is a singleton looked up by its fixed identifier.
#[async_trait]
pub trait GlobalConfigRepository: Send + Sync {
    /// Find the configuration stored under `id`
    async fn find(&self, id: i64) -> Result<Option<TwoFactorAuthGlobalConfig>, DomainError>;

    /// Insert or replace the configuration stored under `config.id`
    async fn upsert(
        &self,
        config: TwoFactorAuthGlobalConfig,
    ) -> Result<TwoFactorAuthGlobalConfig, DomainError>;
}
