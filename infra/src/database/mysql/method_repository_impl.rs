//! MySQL implementation of the MethodRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tfa_core::domain::entities::method::TwoFactorAuthMethod;
use tfa_core::errors::DomainError;
use tfa_core::repositories::MethodRepository;

use super::storage_error;

/// MySQL implementation of MethodRepository over `plg_two_factor_auth_type`
pub struct MySqlMethodRepository {
    pool: MySqlPool,
}

impl MySqlMethodRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_method(row: &sqlx::mysql::MySqlRow) -> Result<TwoFactorAuthMethod, DomainError> {
        let map = storage_error("Failed to decode two-factor method row");
        Ok(TwoFactorAuthMethod {
            id: Some(row.try_get::<i64, _>("id").map_err(&map)?),
            name: row.try_get("name").map_err(&map)?,
            route: row.try_get("route").map_err(&map)?,
            is_disabled: row.try_get("is_disabled").map_err(&map)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("update_date").map_err(&map)?,
        })
    }
}

#[async_trait]
impl MethodRepository for MySqlMethodRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<TwoFactorAuthMethod>, DomainError> {
        let query = r#"
            SELECT CAST(id AS SIGNED) AS id, name, route, is_disabled, update_date
            FROM plg_two_factor_auth_type
            WHERE name = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to find two-factor method"))?;

        row.as_ref().map(Self::row_to_method).transpose()
    }

    async fn upsert(&self, mut method: TwoFactorAuthMethod) -> Result<TwoFactorAuthMethod, DomainError> {
        let existing_id = match method.id {
            Some(id) => Some(id),
            None => self.find_by_name(&method.name).await?.and_then(|m| m.id),
        };

        match existing_id {
            Some(id) => {
                let query = r#"
                    UPDATE plg_two_factor_auth_type
                    SET route = ?, is_disabled = ?, update_date = ?
                    WHERE id = ?
                "#;
                sqlx::query(query)
                    .bind(&method.route)
                    .bind(method.is_disabled)
                    .bind(method.updated_at)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(storage_error("Failed to update two-factor method"))?;
                method.id = Some(id);
            }
            None => {
                let query = r#"
                    INSERT INTO plg_two_factor_auth_type (
                        name, route, is_disabled, create_date, update_date, discriminator_type
                    ) VALUES (?, ?, ?, ?, ?, 'twofactorauthtype')
                "#;
                let result = sqlx::query(query)
                    .bind(&method.name)
                    .bind(&method.route)
                    .bind(method.is_disabled)
                    .bind(method.updated_at)
                    .bind(method.updated_at)
                    .execute(&self.pool)
                    .await
                    .map_err(storage_error("Failed to insert two-factor method"))?;
                method.id = Some(result.last_insert_id() as i64);
            }
        }

        Ok(method)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM plg_two_factor_auth_type")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error("Failed to count two-factor methods"))?;
        let count: i64 = row
            .try_get("count")
            .map_err(storage_error("Failed to decode method count"))?;
        Ok(count as u64)
    }
}
