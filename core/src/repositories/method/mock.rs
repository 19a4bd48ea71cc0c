//! Mock implementation of MethodRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::method::TwoFactorAuthMethod;
use crate::errors::DomainError;

use super::MethodRepository;

/// In-memory method repository keyed by method name
pub struct MockMethodRepository {
    methods: Arc<RwLock<HashMap<String, TwoFactorAuthMethod>>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl MockMethodRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            methods: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail with a storage error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of all stored methods
    pub async fn get_all(&self) -> Vec<TwoFactorAuthMethod> {
        self.methods.read().await.values().cloned().collect()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("Mock method repository error"));
        }
        Ok(())
    }
}

impl Default for MockMethodRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MethodRepository for MockMethodRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<TwoFactorAuthMethod>, DomainError> {
        self.check()?;
        Ok(self.methods.read().await.get(name).cloned())
    }

    async fn upsert(&self, mut method: TwoFactorAuthMethod) -> Result<TwoFactorAuthMethod, DomainError> {
        self.check()?;
        let mut methods = self.methods.write().await;

        method.id = match methods.get(&method.name) {
            Some(existing) => existing.id,
            None => Some(self.next_id.fetch_add(1, Ordering::SeqCst)),
        };
        methods.insert(method.name.clone(), method.clone());
        Ok(method)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.methods.read().await.len() as u64)
    }
}
