//! Template asset installer implementation

use std::path::Path;
use std::sync::Arc;

use crate::errors::DomainResult;

use super::traits::AssetStore;

/// Copies and removes the plugin's template tree
///
/// Both operations are idempotent: an existing destination counts as
/// already installed, and removing a missing tree does nothing.
pub struct TemplateAssetInstaller {
    store: Arc<dyn AssetStore>,
}

impl TemplateAssetInstaller {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Mirror `source` into `dest` unless `dest` already exists.
    ///
    /// Returns `true` if files were copied by this call.
    pub async fn install(&self, source: &Path, dest: &Path) -> DomainResult<bool> {
        if self.store.exists(dest).await? {
            tracing::debug!(dest = %dest.display(), "Template assets already installed");
            return Ok(false);
        }

        let copied = self.store.mirror(source, dest).await?;
        tracing::info!(
            source = %source.display(),
            dest = %dest.display(),
            files = copied,
            "Template assets installed"
        );
        Ok(true)
    }

    /// Delete `dest` and everything below it.
    ///
    /// Returns `true` if something was removed.
    pub async fn uninstall(&self, dest: &Path) -> DomainResult<bool> {
        if !self.store.exists(dest).await? {
            tracing::debug!(dest = %dest.display(), "Template assets not present");
            return Ok(false);
        }

        self.store.remove(dest).await?;
        tracing::info!(dest = %dest.display(), "Template assets removed");
        Ok(true)
    }
}
