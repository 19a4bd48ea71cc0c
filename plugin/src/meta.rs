//! Plugin metadata handed to every lifecycle entry point.

use serde::{Deserialize, Serialize};

use tfa_shared::config::plugin::DEFAULT_PLUGIN_CODE;

/// Identity of the plugin as registered with the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMeta {
    /// Plugin code, unique across the host's plugins
    pub code: String,

    /// Display name
    pub name: String,

    /// Installed version
    pub version: String,
}

impl PluginMeta {
    /// Metadata of this build
    pub fn current() -> Self {
        Self {
            code: DEFAULT_PLUGIN_CODE.to_string(),
            name: "2段階認証プラグイン(SMS)".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Parse metadata passed by the host as JSON
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for PluginMeta {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_meta() {
        let meta = PluginMeta::current();
        assert_eq!(meta.code, "TwoFactorAuthCustomerSms42");
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_from_json() {
        let meta = PluginMeta::from_json(
            r#"{"code":"TwoFactorAuthCustomerSms42","name":"SMS","version":"4.3.0"}"#,
        )
        .unwrap();
        assert_eq!(meta.version, "4.3.0");

        assert!(PluginMeta::from_json(r#"{"code":"x"}"#).is_err());
    }
}
