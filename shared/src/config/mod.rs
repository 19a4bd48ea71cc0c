//! Configuration module
//!
//! This module organizes configuration into logical areas:
//! - `database` - Durable storage connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `plugin` - Plugin identity and template asset paths

pub mod database;
pub mod environment;
pub mod plugin;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use plugin::PluginConfig;

/// Complete plugin configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Plugin paths and identity
    #[serde(default)]
    pub plugin: PluginConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            plugin: PluginConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl Settings {
    /// Create settings for the given environment with its logging defaults
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_for_environment() {
        let settings = Settings::for_environment(Environment::Production);
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.plugin.plugin_code, "TwoFactorAuthCustomerSms42");
    }
}
