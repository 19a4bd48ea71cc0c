//! Filesystem port used by the template asset installer

use async_trait::async_trait;
use std::path::Path;

use crate::errors::DomainResult;

/// Directory-tree operations needed to install and remove template assets
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Whether `path` exists
    async fn exists(&self, path: &Path) -> DomainResult<bool>;

    /// Create `dest` (and missing parents) and copy every file below
    /// `source` into it, preserving relative paths.
    ///
    /// `dest` must only become visible once the copy is complete, so a
    /// failed call never leaves something `exists` reports as installed.
    /// Returns the number of entries copied. A missing `source` is an error.
    async fn mirror(&self, source: &Path, dest: &Path) -> DomainResult<usize>;

    /// Recursively delete `path`. A missing `path` is not an error.
    async fn remove(&self, path: &Path) -> DomainResult<()>;
}
