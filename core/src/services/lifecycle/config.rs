//! Lifecycle configuration

use std::path::PathBuf;

use tfa_shared::PluginConfig;

use crate::domain::entities::method::SMS_METHOD_NAME;
use crate::domain::entities::page::{
    PageDescriptor, DEFAULT_LAYOUT_UNDERLAYER_PAGE, SMS_SEND_ONETIME_URL,
};

/// Everything the lifecycle operations register or remove
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Name of the two-factor method
    pub method_name: String,
    /// Route stored with the method when it is first created
    pub method_route: String,
    /// Pages registered on enable and removed on disable, in order
    pub pages: Vec<PageDescriptor>,
    /// Layout the pages are placed into
    pub layout_id: i64,
    /// Bundled template tree
    pub asset_source: PathBuf,
    /// Where the template tree is mirrored to
    pub asset_destination: PathBuf,
    /// Directory removed on teardown; contains `asset_destination`
    pub asset_root: PathBuf,
}

impl LifecycleConfig {
    /// SMS method configuration for the given plugin paths
    pub fn sms(plugin: &PluginConfig) -> Self {
        Self {
            method_name: SMS_METHOD_NAME.to_string(),
            method_route: SMS_SEND_ONETIME_URL.to_string(),
            pages: PageDescriptor::sms_defaults(),
            layout_id: DEFAULT_LAYOUT_UNDERLAYER_PAGE,
            asset_source: plugin.asset_source_dir.clone(),
            asset_destination: plugin.asset_destination(),
            asset_root: plugin.asset_root(),
        }
    }

    /// URL keys of the configured pages
    pub fn page_urls(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.url_key.as_str()).collect()
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self::sms(&PluginConfig::default())
    }
}
