//! Plugin identity and template asset path configuration
//!
//! The host platform serves front templates from a single theme directory.
//! This plugin mirrors its bundled templates into a sub-tree of that directory
//! named after the plugin code.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plugin code, also the name of the plugin's directory under the theme front dir
pub const DEFAULT_PLUGIN_CODE: &str = "TwoFactorAuthCustomerSms42";

/// Path of the template tree below both the plugin's source and destination roots
pub const TEMPLATE_SUBDIR: &str = "Resource/template/default";

/// Plugin paths and identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginConfig {
    /// Front theme directory of the host platform (`eccube_theme_front_dir`)
    pub theme_front_dir: PathBuf,

    /// Plugin code
    #[serde(default = "default_plugin_code")]
    pub plugin_code: String,

    /// Directory holding the plugin's bundled template tree
    pub asset_source_dir: PathBuf,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            theme_front_dir: PathBuf::from("app/template/default"),
            plugin_code: default_plugin_code(),
            asset_source_dir: PathBuf::from(TEMPLATE_SUBDIR),
        }
    }
}

impl PluginConfig {
    /// Create a configuration for the given theme and source directories
    pub fn new(theme_front_dir: impl Into<PathBuf>, asset_source_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_front_dir: theme_front_dir.into(),
            asset_source_dir: asset_source_dir.into(),
            ..Default::default()
        }
    }

    /// Root of everything the plugin owns inside the theme directory
    pub fn asset_root(&self) -> PathBuf {
        self.theme_front_dir.join(&self.plugin_code)
    }

    /// Destination the bundled templates are mirrored into
    pub fn asset_destination(&self) -> PathBuf {
        self.asset_root().join(TEMPLATE_SUBDIR)
    }
}

fn default_plugin_code() -> String {
    DEFAULT_PLUGIN_CODE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_asset_paths_are_derived_from_theme_dir() {
        let config = PluginConfig::new("/var/www/html/app/template/default", "/opt/plugin/templates");

        assert_eq!(
            config.asset_root(),
            Path::new("/var/www/html/app/template/default/TwoFactorAuthCustomerSms42")
        );
        assert_eq!(
            config.asset_destination(),
            Path::new(
                "/var/www/html/app/template/default/TwoFactorAuthCustomerSms42/Resource/template/default"
            )
        );
    }

    #[test]
    fn test_destination_is_inside_root() {
        let config = PluginConfig::default();
        assert!(config.asset_destination().starts_with(config.asset_root()));
    }
}
