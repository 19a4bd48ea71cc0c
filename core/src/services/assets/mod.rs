//! Template asset installation
//!
//! The plugin ships a tree of front templates that must be mirrored into the
//! host's theme directory while enabled. Filesystem access goes through the
//! [`AssetStore`] port so the installer can run against the local disk in
//! production and an in-memory tree in tests.

mod installer;
mod mock;
mod traits;


pub use installer::TemplateAssetInstaller;
pub use mock::MockAssetStore;
pub use traits::AssetStore;
