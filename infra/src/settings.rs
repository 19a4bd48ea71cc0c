//! Layered settings loading.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults for the detected [`Environment`]
//! 2. optional `config.<env>.{toml,yaml,json}` file in the working directory
//! 3. `TFA_*` environment variables, nested with `__`
//!    (e.g. `TFA_PLUGIN__THEME_FRONT_DIR`, `TFA_DATABASE__URL`)
//!
//! The host's `DATABASE_URL` is honoured when no `TFA_DATABASE__URL` is set.
//! A `.env` file is read first so all of the above may come from it.

use std::env;
use std::path::Path;

use config::{Config, File};
use tfa_shared::{Environment, Settings};

use crate::InfrastructureError;

const ENV_PREFIX: &str = "TFA";

/// Load settings from the working directory and the process environment
pub fn load_settings() -> Result<Settings, InfrastructureError> {
    dotenvy::dotenv().ok();
    load_settings_from(Path::new("."), Environment::from_env())
}

/// Load settings for `environment`, looking for its config file in `config_dir`
pub fn load_settings_from(
    config_dir: &Path,
    environment: Environment,
) -> Result<Settings, InfrastructureError> {
    let defaults = Settings::for_environment(environment);
    let config_file = config_dir.join(environment.config_file());

    let config = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::from(config_file.as_path()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings: Settings = config.try_deserialize()?;

    if env::var("TFA_DATABASE__URL").is_err() {
        if let Ok(url) = env::var("DATABASE_URL") {
            settings.database.url = url;
        }
    }

    tracing::debug!(
        environment = %settings.environment,
        config_file = %config_file.display(),
        theme_front_dir = %settings.plugin.theme_front_dir.display(),
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tfa_shared::LogFormat;

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings_from(temp.path(), Environment::Production).unwrap();

        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.plugin.plugin_code, "TwoFactorAuthCustomerSms42");
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.staging.toml"),
            r#"
                [plugin]
                theme_front_dir = "/srv/eccube/app/template/default"
                asset_source_dir = "/srv/eccube/app/Plugin/TwoFactorAuthCustomerSms42/Resource/template/default"

                [logging]
                level = "debug"
                format = "compact"
            "#,
        )
        .unwrap();

        let settings = load_settings_from(temp.path(), Environment::Staging).unwrap();

        assert_eq!(
            settings.plugin.asset_root(),
            Path::new("/srv/eccube/app/template/default/TwoFactorAuthCustomerSms42")
        );
        assert_eq!(settings.plugin.plugin_code, "TwoFactorAuthCustomerSms42");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_malformed_config_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.development.toml"), "[plugin\n").unwrap();

        let result = load_settings_from(temp.path(), Environment::Development);

        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }
}
