//! Collaborators a lifecycle operation runs with.
//!
//! The host hands every entry point an explicit context instead of a service
//! container. Production contexts are built over a MySQL pool and the local
//! disk; tests assemble one from the in-memory implementations.

use std::sync::Arc;

use tfa_core::repositories::{
    GlobalConfigRepository, MethodRepository, PageLayoutRepository, PageRepository,
};
use tfa_core::services::AssetStore;
use tfa_infra::database::{
    DatabasePool, MySqlGlobalConfigRepository, MySqlMethodRepository, MySqlPageLayoutRepository,
    MySqlPageRepository,
};
use tfa_infra::filesystem::LocalAssetStore;
use tfa_shared::PluginConfig;

/// Storage and filesystem ports plus the plugin's path configuration
#[derive(Clone)]
pub struct PluginContext {
    pub methods: Arc<dyn MethodRepository>,
    pub global_config: Arc<dyn GlobalConfigRepository>,
    pub pages: Arc<dyn PageRepository>,
    pub page_layouts: Arc<dyn PageLayoutRepository>,
    pub assets: Arc<dyn AssetStore>,
    pub plugin: PluginConfig,
}

impl PluginContext {
    pub fn new(
        methods: Arc<dyn MethodRepository>,
        global_config: Arc<dyn GlobalConfigRepository>,
        pages: Arc<dyn PageRepository>,
        page_layouts: Arc<dyn PageLayoutRepository>,
        assets: Arc<dyn AssetStore>,
        plugin: PluginConfig,
    ) -> Self {
        Self {
            methods,
            global_config,
            pages,
            page_layouts,
            assets,
            plugin,
        }
    }

    /// Collaborators backed by the host database and the local theme directory
    pub fn mysql(pool: &DatabasePool, plugin: PluginConfig) -> Self {
        let pool = pool.get_pool();

        Self::new(
            Arc::new(MySqlMethodRepository::new(pool.clone())),
            Arc::new(MySqlGlobalConfigRepository::new(pool.clone())),
            Arc::new(MySqlPageRepository::new(pool.clone())),
            Arc::new(MySqlPageLayoutRepository::new(pool.clone())),
            Arc::new(LocalAssetStore::new()),
            plugin,
        )
    }
}
