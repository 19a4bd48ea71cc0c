//! MySQL implementation of the GlobalConfigRepository trait.
//!
//! Excluded routes are stored newline-separated in a single text column.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use tfa_core::domain::entities::global_config::TwoFactorAuthGlobalConfig;
use tfa_core::errors::DomainError;
use tfa_core::repositories::GlobalConfigRepository;

use super::storage_error;

/// MySQL implementation of GlobalConfigRepository over `plg_two_factor_auth_config`
pub struct MySqlGlobalConfigRepository {
    pool: MySqlPool,
}

impl MySqlGlobalConfigRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub(crate) fn decode_routes(raw: Option<String>) -> Vec<String> {
        raw.unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn encode_routes(routes: &[String]) -> String {
        routes.join("\n")
    }
}

#[async_trait]
impl GlobalConfigRepository for MySqlGlobalConfigRepository {
    async fn find(&self, id: i64) -> Result<Option<TwoFactorAuthGlobalConfig>, DomainError> {
        let row = sqlx::query("SELECT CAST(id AS SIGNED) AS id, exclude_routes FROM plg_two_factor_auth_config WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to find two-factor configuration"))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let map = storage_error("Failed to decode two-factor configuration");
        Ok(Some(TwoFactorAuthGlobalConfig {
            id: row.try_get("id").map_err(&map)?,
            exclude_routes: Self::decode_routes(row.try_get("exclude_routes").map_err(&map)?),
        }))
    }

    async fn upsert(
        &self,
        config: TwoFactorAuthGlobalConfig,
    ) -> Result<TwoFactorAuthGlobalConfig, DomainError> {
        let query = r#"
            INSERT INTO plg_two_factor_auth_config (id, exclude_routes, discriminator_type)
            VALUES (?, ?, 'twofactorauthconfig')
            ON DUPLICATE KEY UPDATE exclude_routes = VALUES(exclude_routes)
        "#;

        sqlx::query(query)
            .bind(config.id)
            .bind(Self::encode_routes(&config.exclude_routes))
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to store two-factor configuration"))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_encoding() {
        let routes = vec!["a".to_string(), "b".to_string()];
        let encoded = MySqlGlobalConfigRepository::encode_routes(&routes);
        assert_eq!(encoded, "a\nb");
        assert_eq!(MySqlGlobalConfigRepository::decode_routes(Some(encoded)), routes);
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let decoded = MySqlGlobalConfigRepository::decode_routes(Some("a\r\n\n  b  \n".to_string()));
        assert_eq!(decoded, vec!["a", "b"]);
        assert!(MySqlGlobalConfigRepository::decode_routes(None).is_empty());
    }
}
