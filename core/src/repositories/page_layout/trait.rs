//! Repository trait for layouts and the slots placing pages into them.

use async_trait::async_trait;

use crate::domain::entities::page::{Layout, PageLayout};
use crate::errors::DomainError;

/// Repository trait for [`Layout`] lookups and [`PageLayout`] persistence
///
/// Layouts belong to the host platform and are only read. Slots are keyed
/// by the `(page_id, layout_id)` pair.
#[async_trait]
pub trait PageLayoutRepository: Send + Sync {
    /// Find a shared layout by identifier
    async fn find_layout(&self, id: i64) -> Result<Option<Layout>, DomainError>;

    /// Find the slot joining `page_id` and `layout_id`
    async fn find(&self, page_id: i64, layout_id: i64) -> Result<Option<PageLayout>, DomainError>;

    /// Store a new slot
    async fn insert(&self, slot: PageLayout) -> Result<PageLayout, DomainError>;

    /// Delete the slot joining `page_id` and `layout_id`
    ///
    /// # Returns
    /// * `Ok(true)` - Slot was deleted
    /// * `Ok(false)` - Slot not found
    async fn delete(&self, page_id: i64, layout_id: i64) -> Result<bool, DomainError>;
}
