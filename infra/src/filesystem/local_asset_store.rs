//! Local-disk implementation of the AssetStore port on `tokio::fs`.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use tfa_core::errors::DomainResult;
use tfa_core::services::AssetStore;

use crate::InfrastructureError;

/// Asset store writing to the host's theme directory
#[derive(Debug, Clone, Default)]
pub struct LocalAssetStore;

impl LocalAssetStore {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(path: &Path) -> impl Fn(io::Error) -> InfrastructureError + '_ {
    move |source| InfrastructureError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Mirror `source` into a staging directory next to `dest`, then rename it
/// into place. `dest` therefore only ever appears complete; a failed copy
/// removes the staging directory.
async fn mirror_tree(source: &Path, dest: &Path) -> Result<usize, InfrastructureError> {
    let metadata = fs::metadata(source).await.map_err(io_error(source))?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::Io {
            path: source.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "asset source is not a directory"),
        });
    }

    let staging = staging_path(dest)?;
    if let Some(parent) = staging.parent() {
        fs::create_dir_all(parent).await.map_err(io_error(parent))?;
    }
    match fs::remove_dir_all(&staging).await {
        Ok(()) => tracing::warn!(staging = %staging.display(), "Removed stale staging directory"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error(&staging)(e)),
    }
    fs::create_dir(&staging).await.map_err(io_error(&staging))?;

    let copied = match copy_tree(source, &staging).await {
        Ok(copied) => copied,
        Err(e) => {
            if let Err(cleanup) = fs::remove_dir_all(&staging).await {
                tracing::warn!(staging = %staging.display(), error = %cleanup, "Failed to remove staging directory");
            }
            return Err(e);
        }
    };

    fs::rename(&staging, dest).await.map_err(io_error(dest))?;
    Ok(copied)
}

/// Hidden sibling of `dest` used while copying
fn staging_path(dest: &Path) -> Result<PathBuf, InfrastructureError> {
    let name = dest.file_name().ok_or_else(|| InfrastructureError::Io {
        path: dest.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "asset destination has no file name"),
    })?;

    let mut staging_name = std::ffi::OsString::from(".");
    staging_name.push(name);
    staging_name.push(".partial");
    Ok(dest.with_file_name(staging_name))
}

/// Copy the tree below `source` into the existing directory `dest`, walking
/// directories with an explicit stack. Symlinks are recreated, not followed.
async fn copy_tree(source: &Path, dest: &Path) -> Result<usize, InfrastructureError> {
    let mut copied = 0;
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(source.to_path_buf(), dest.to_path_buf())];

    while let Some((from_dir, to_dir)) = pending.pop() {
        let mut entries = fs::read_dir(&from_dir).await.map_err(io_error(&from_dir))?;

        while let Some(entry) = entries.next_entry().await.map_err(io_error(&from_dir))? {
            let from = entry.path();
            let to = to_dir.join(entry.file_name());
            let file_type = entry.file_type().await.map_err(io_error(&from))?;

            if file_type.is_symlink() {
                copy_symlink(&from, &to).await?;
                copied += 1;
            } else if file_type.is_dir() {
                fs::create_dir_all(&to).await.map_err(io_error(&to))?;
                pending.push((from, to));
            } else {
                fs::copy(&from, &to).await.map_err(io_error(&to))?;
                tracing::trace!(file = %to.display(), "Copied template asset");
                copied += 1;
            }
        }
    }

    Ok(copied)
}

#[cfg(unix)]
async fn copy_symlink(from: &Path, to: &Path) -> Result<(), InfrastructureError> {
    let target = fs::read_link(from).await.map_err(io_error(from))?;
    fs::symlink(&target, to).await.map_err(io_error(to))?;
    tracing::trace!(link = %to.display(), target = %target.display(), "Recreated template symlink");
    Ok(())
}

// Without unix symlinks the link target's contents are copied instead.
#[cfg(not(unix))]
async fn copy_symlink(from: &Path, to: &Path) -> Result<(), InfrastructureError> {
    if fs::metadata(from).await.map_err(io_error(from))?.is_dir() {
        fs::create_dir_all(to).await.map_err(io_error(to))?;
        Box::pin(copy_tree(from, to)).await?;
    } else {
        fs::copy(from, to).await.map_err(io_error(to))?;
    }
    Ok(())
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn exists(&self, path: &Path) -> DomainResult<bool> {
        let exists = fs::try_exists(path).await.map_err(io_error(path))?;
        Ok(exists)
    }

    async fn mirror(&self, source: &Path, dest: &Path) -> DomainResult<usize> {
        Ok(mirror_tree(source, dest).await?)
    }

    async fn remove(&self, path: &Path) -> DomainResult<()> {
        let metadata = match fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(io_error(path)(e).into()),
        };

        let result = if metadata.is_dir() {
            fs::remove_dir_all(path).await
        } else {
            fs::remove_file(path).await
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(path)(e).into()),
        }
    }
}
