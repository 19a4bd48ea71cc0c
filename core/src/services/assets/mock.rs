//! In-memory implementation of AssetStore for testing

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};

use super::traits::AssetStore;

#[derive(Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl Tree {
    fn add_dir_all(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

/// In-memory directory tree
pub struct MockAssetStore {
    tree: RwLock<Tree>,
    should_fail: AtomicBool,
}

impl MockAssetStore {
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(Tree::default()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether write operations should fail with a filesystem error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Add a file, creating its parent directories
    pub async fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut tree = self.tree.write().await;
        if let Some(parent) = path.parent() {
            tree.add_dir_all(parent);
        }
        tree.files.insert(path.to_path_buf(), contents.into());
    }

    /// Contents of the file at `path`
    pub async fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.tree.read().await.files.get(path.as_ref()).cloned()
    }

    /// Paths of all files below `root`, relative to it
    pub async fn list_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        let tree = self.tree.read().await;
        tree.files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .collect()
    }

    fn check(&self, path: &Path) -> DomainResult<()> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::filesystem(path, "Mock asset store error"));
        }
        Ok(())
    }
}

impl Default for MockAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for MockAssetStore {
    async fn exists(&self, path: &Path) -> DomainResult<bool> {
        let tree = self.tree.read().await;
        Ok(tree.dirs.contains(path) || tree.files.contains_key(path))
    }

    async fn mirror(&self, source: &Path, dest: &Path) -> DomainResult<usize> {
        self.check(dest)?;
        let mut tree = self.tree.write().await;
        if !tree.dirs.contains(source) {
            return Err(DomainError::filesystem(source, "source directory does not exist"));
        }

        let copies: Vec<(PathBuf, Vec<u8>)> = tree
            .files
            .iter()
            .filter_map(|(path, contents)| {
                path.strip_prefix(source)
                    .ok()
                    .map(|rel| (dest.join(rel), contents.clone()))
            })
            .collect();
        let subdirs: Vec<PathBuf> = tree
            .dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(source).ok().map(|rel| dest.join(rel)))
            .collect();

        tree.add_dir_all(dest);
        for dir in subdirs {
            tree.add_dir_all(&dir);
        }
        let count = copies.len();
        tree.files.extend(copies);
        Ok(count)
    }

    async fn remove(&self, path: &Path) -> DomainResult<()> {
        self.check(path)?;
        let mut tree = self.tree.write().await;
        tree.dirs.retain(|dir| !dir.starts_with(path));
        tree.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }
}
