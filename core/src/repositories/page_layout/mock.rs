//! Mock implementation of PageLayoutRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::page::{Layout, PageLayout, DEFAULT_LAYOUT_UNDERLAYER_PAGE};
use crate::errors::DomainError;

use super::PageLayoutRepository;

/// In-memory layout and slot repository
pub struct MockPageLayoutRepository {
    layouts: BTreeMap<i64, Layout>,
    slots: RwLock<BTreeMap<(i64, i64), PageLayout>>,
    should_fail: AtomicBool,
}

impl MockPageLayoutRepository {
    /// Create a repository seeded with the host's two default layouts
    pub fn new() -> Self {
        Self::with_layouts(vec![
            Layout::new(1, "トップページ用レイアウト"),
            Layout::new(DEFAULT_LAYOUT_UNDERLAYER_PAGE, "下層ページ用レイアウト"),
        ])
    }

    /// Create a repository holding exactly `layouts`
    pub fn with_layouts(layouts: Vec<Layout>) -> Self {
        Self {
            layouts: layouts.into_iter().map(|l| (l.id, l)).collect(),
            slots: RwLock::new(BTreeMap::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail with a storage error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of all stored slots
    pub async fn get_all(&self) -> Vec<PageLayout> {
        self.slots.read().await.values().copied().collect()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("Mock page layout repository error"));
        }
        Ok(())
    }
}

impl Default for MockPageLayoutRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageLayoutRepository for MockPageLayoutRepository {
    async fn find_layout(&self, id: i64) -> Result<Option<Layout>, DomainError> {
        self.check()?;
        Ok(self.layouts.get(&id).cloned())
    }

    async fn find(&self, page_id: i64, layout_id: i64) -> Result<Option<PageLayout>, DomainError> {
        self.check()?;
        Ok(self.slots.read().await.get(&(page_id, layout_id)).copied())
    }

    async fn insert(&self, slot: PageLayout) -> Result<PageLayout, DomainError> {
        self.check()?;
        let mut slots = self.slots.write().await;
        if slots.contains_key(&(slot.page_id, slot.layout_id)) {
            return Err(DomainError::storage(format!(
                "Duplicate page layout ({}, {})",
                slot.page_id, slot.layout_id
            )));
        }
        slots.insert((slot.page_id, slot.layout_id), slot);
        Ok(slot)
    }

    async fn delete(&self, page_id: i64, layout_id: i64) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.slots.write().await.remove(&(page_id, layout_id)).is_some())
    }
}
