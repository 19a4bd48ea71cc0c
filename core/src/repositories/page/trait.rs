//! Page repository trait defining the interface for page persistence.

use async_trait::async_trait;

use crate::domain::entities::page::{NewPage, Page};
use crate::errors::DomainError;

/// Repository trait for [`Page`] persistence operations
///
/// Pages are keyed by their unique URL. Implementations assign the page
/// identifier on insert and must have committed the row before returning,
/// so that a layout slot can reference it right away.
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Find a page by its URL key
    ///
    /// # Returns
    /// * `Ok(Some(page))` - Page found
    /// * `Ok(None)` - No page registered under `url`
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_url(&self, url: &str) -> Result<Option<Page>, DomainError>;

    /// Store a new page and return it with its generated identifier
    async fn insert(&self, page: NewPage) -> Result<Page, DomainError>;

    /// Delete a page by identifier
    ///
    /// # Returns
    /// * `Ok(true)` - Page was deleted
    /// * `Ok(false)` - Page not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
