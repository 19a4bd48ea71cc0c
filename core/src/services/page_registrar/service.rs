//! Page registrar service implementation

use std::sync::Arc;

use crate::domain::entities::page::{NewPage, Page, PageDescriptor, PageLayout};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PageLayoutRepository, PageRepository};

/// Ensures each described page exists exactly once, placed in the layout
/// configured at construction, and removes those pages again.
///
/// The existence check is by URL only. Two concurrent installs of the same
/// plugin can both miss the page and insert it twice.
pub struct PageRegistrar {
    pages: Arc<dyn PageRepository>,
    page_layouts: Arc<dyn PageLayoutRepository>,
    layout_id: i64,
}

impl PageRegistrar {
    /// Create a registrar placing new pages into layout `layout_id`
    pub fn new(
        pages: Arc<dyn PageRepository>,
        page_layouts: Arc<dyn PageLayoutRepository>,
        layout_id: i64,
    ) -> Self {
        Self {
            pages,
            page_layouts,
            layout_id,
        }
    }

    /// Layout new pages are placed into
    pub fn layout_id(&self) -> i64 {
        self.layout_id
    }

    /// Create every described page that does not exist yet, in order.
    ///
    /// The layout is resolved before anything is written, so a missing
    /// layout leaves storage untouched. A page that exists without its slot
    /// gets the slot back.
    ///
    /// Returns the pages created by this call; an empty list means every
    /// page was already present.
    pub async fn ensure_pages(&self, descriptors: &[PageDescriptor]) -> DomainResult<Vec<Page>> {
        let layout = self
            .page_layouts
            .find_layout(self.layout_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Layout {}", self.layout_id)))?;

        let mut created = Vec::new();

        for descriptor in descriptors {
            if let Some(page) = self.pages.find_by_url(&descriptor.url_key).await? {
                if self.page_layouts.find(page.id, layout.id).await?.is_none() {
                    self.page_layouts.insert(PageLayout::first(&page, &layout)).await?;
                    tracing::warn!(url = %page.url, page_id = page.id, "Restored missing layout slot");
                } else {
                    tracing::debug!(url = %descriptor.url_key, "Page already registered");
                }
                continue;
            }

            let page = self.pages.insert(NewPage::from(descriptor)).await?;
            self.page_layouts.insert(PageLayout::first(&page, &layout)).await?;

            tracing::info!(url = %page.url, page_id = page.id, layout_id = layout.id, "Page registered");
            created.push(page);
        }

        Ok(created)
    }

    /// Remove every described page that exists, together with its layout slot.
    ///
    /// Returns the number of pages removed.
    pub async fn remove_pages(&self, descriptors: &[PageDescriptor]) -> DomainResult<usize> {
        let mut removed = 0;

        for descriptor in descriptors {
            let Some(page) = self.pages.find_by_url(&descriptor.url_key).await? else {
                tracing::debug!(url = %descriptor.url_key, "Page not registered, nothing to remove");
                continue;
            };

            if !self.page_layouts.delete(page.id, self.layout_id).await? {
                tracing::warn!(url = %page.url, page_id = page.id, "Page had no layout slot");
            }
            self.pages.delete(page.id).await?;

            tracing::info!(url = %page.url, page_id = page.id, "Page removed");
            removed += 1;
        }

        Ok(removed)
    }
}
