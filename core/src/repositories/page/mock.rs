//! Mock implementation of PageRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::page::{NewPage, Page};
use crate::errors::DomainError;

use super::PageRepository;

/// In-memory page repository
///
/// Unlike the durable implementation this one does not enforce URL
/// uniqueness, so tests can observe duplicate inserts.
pub struct MockPageRepository {
    pages: RwLock<BTreeMap<i64, Page>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl MockPageRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            pages: RwLock::new(BTreeMap::new()),
            // Host platforms ship with their own pages; keep plugin ids apart.
            next_id: AtomicI64::new(100),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail with a storage error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of all stored pages ordered by identifier
    pub async fn get_all(&self) -> Vec<Page> {
        self.pages.read().await.values().cloned().collect()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("Mock page repository error"));
        }
        Ok(())
    }
}

impl Default for MockPageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageRepository for MockPageRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<Page>, DomainError> {
        self.check()?;
        Ok(self.pages.read().await.values().find(|p| p.url == url).cloned())
    }

    async fn insert(&self, page: NewPage) -> Result<Page, DomainError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let page = Page::from_new(id, page);
        self.pages.write().await.insert(id, page.clone());
        Ok(page)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.pages.write().await.remove(&id).is_some())
    }
}
