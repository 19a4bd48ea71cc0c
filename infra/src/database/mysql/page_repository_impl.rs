//! MySQL implementation of the PageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tfa_core::domain::entities::page::{EditType, NewPage, Page};
use tfa_core::errors::DomainError;
use tfa_core::repositories::PageRepository;

use super::storage_error;

/// MySQL implementation of PageRepository over the host's `dtb_page` table
pub struct MySqlPageRepository {
    pool: MySqlPool,
}

impl MySqlPageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_page(row: &sqlx::mysql::MySqlRow) -> Result<Page, DomainError> {
        let map = storage_error("Failed to decode page row");
        let edit_type: i64 = row.try_get("edit_type").map_err(&map)?;

        Ok(Page {
            id: row.try_get("id").map_err(&map)?,
            url: row.try_get("url").map_err(&map)?,
            name: row
                .try_get::<Option<String>, _>("page_name")
                .map_err(&map)?
                .unwrap_or_default(),
            file_name: row
                .try_get::<Option<String>, _>("file_name")
                .map_err(&map)?
                .unwrap_or_default(),
            edit_type: i16::try_from(edit_type)
                .ok()
                .and_then(EditType::from_i16)
                .ok_or_else(|| DomainError::Internal {
                    message: format!("Unknown page edit type: {}", edit_type),
                })?,
            meta_robots: row.try_get("meta_robots").map_err(&map)?,
            created_at: row.try_get::<DateTime<Utc>, _>("create_date").map_err(&map)?,
        })
    }
}

#[async_trait]
impl PageRepository for MySqlPageRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<Page>, DomainError> {
        let query = r#"
            SELECT CAST(id AS SIGNED) AS id, url, page_name, file_name,
                   CAST(edit_type AS SIGNED) AS edit_type, meta_robots, create_date
            FROM dtb_page
            WHERE url = ?
            ORDER BY id
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to find page"))?;

        row.as_ref().map(Self::row_to_page).transpose()
    }

    async fn insert(&self, page: NewPage) -> Result<Page, DomainError> {
        let query = r#"
            INSERT INTO dtb_page (
                page_name, url, file_name, edit_type, meta_robots,
                create_date, update_date, discriminator_type
            ) VALUES (?, ?, ?, ?, ?, ?, ?, 'page')
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&page.name)
            .bind(&page.url)
            .bind(&page.file_name)
            .bind(page.edit_type.as_i16())
            .bind(&page.meta_robots)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to insert page"))?;

        let mut stored = Page::from_new(result.last_insert_id() as i64, page);
        stored.created_at = now;
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dtb_page WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to delete page"))?;

        Ok(result.rows_affected() > 0)
    }
}
