//! Services containing the plugin's registration logic.

pub mod assets;
pub mod lifecycle;
pub mod method_registry;
pub mod page_registrar;

// Re-export commonly used types
pub use assets::{AssetStore, MockAssetStore, TemplateAssetInstaller};
pub use lifecycle::{LifecycleConfig, LifecycleController, LifecycleState, LifecycleStep};
pub use method_registry::MethodRegistry;
pub use page_registrar::PageRegistrar;
