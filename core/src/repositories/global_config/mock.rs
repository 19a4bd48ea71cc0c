//! Mock implementation of GlobalConfigRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::global_config::TwoFactorAuthGlobalConfig;
use crate::errors::DomainError;

use super::GlobalConfigRepository;

/// In-memory global configuration repository
pub struct MockGlobalConfigRepository {
    configs: RwLock<HashMap<i64, TwoFactorAuthGlobalConfig>>,
    should_fail: AtomicBool,
}

impl MockGlobalConfigRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            configs: RwLock::new(HashMap::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Create a repository already holding `config`
    pub fn with_config(config: TwoFactorAuthGlobalConfig) -> Self {
        let mut configs = HashMap::new();
        configs.insert(config.id, config);
        Self {
            configs: RwLock::new(configs),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail with a storage error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of stored configuration rows
    pub async fn row_count(&self) -> usize {
        self.configs.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("Mock global config repository error"));
        }
        Ok(())
    }
}

impl Default for MockGlobalConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GlobalConfigRepository for MockGlobalConfigRepository {
    async fn find(&self, id: i64) -> Result<Option<TwoFactorAuthGlobalConfig>, DomainError> {
        self.check()?;
        Ok(self.configs.read().await.get(&id).cloned())
    }

    async fn upsert(
        &self,
        config: TwoFactorAuthGlobalConfig,
    ) -> Result<TwoFactorAuthGlobalConfig, DomainError> {
        self.check()?;
        self.configs.write().await.insert(config.id, config.clone());
        Ok(config)
    }
}
