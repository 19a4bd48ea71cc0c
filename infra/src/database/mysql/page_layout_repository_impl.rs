//! MySQL implementation of the PageLayoutRepository trait.
//!
//! Layouts (`dtb_layout`) are owned by the host and only read here. Slots
//! live in `dtb_page_layout`, keyed by `(page_id, layout_id)`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use tfa_core::domain::entities::page::{Layout, PageLayout};
use tfa_core::errors::DomainError;
use tfa_core::repositories::PageLayoutRepository;

use super::storage_error;

/// MySQL implementation of PageLayoutRepository
pub struct MySqlPageLayoutRepository {
    pool: MySqlPool,
}

impl MySqlPageLayoutRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageLayoutRepository for MySqlPageLayoutRepository {
    async fn find_layout(&self, id: i64) -> Result<Option<Layout>, DomainError> {
        let row = sqlx::query("SELECT CAST(id AS SIGNED) AS id, layout_name FROM dtb_layout WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to find layout"))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let map = storage_error("Failed to decode layout row");
        Ok(Some(Layout {
            id: row.try_get("id").map_err(&map)?,
            name: row
                .try_get::<Option<String>, _>("layout_name")
                .map_err(&map)?
                .unwrap_or_default(),
        }))
    }

    async fn find(&self, page_id: i64, layout_id: i64) -> Result<Option<PageLayout>, DomainError> {
        let query = r#"
            SELECT CAST(page_id AS SIGNED) AS page_id,
                   CAST(layout_id AS SIGNED) AS layout_id,
                   CAST(sort_no AS SIGNED) AS sort_no
            FROM dtb_page_layout
            WHERE page_id = ? AND layout_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(page_id)
            .bind(layout_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to find page layout"))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let map = storage_error("Failed to decode page layout row");
        Ok(Some(PageLayout {
            page_id: row.try_get("page_id").map_err(&map)?,
            layout_id: row.try_get("layout_id").map_err(&map)?,
            sort_no: row.try_get::<i64, _>("sort_no").map_err(&map)? as i32,
        }))
    }

    async fn insert(&self, slot: PageLayout) -> Result<PageLayout, DomainError> {
        let query = r#"
            INSERT INTO dtb_page_layout (page_id, layout_id, sort_no, discriminator_type)
            VALUES (?, ?, ?, 'pagelayout')
        "#;

        sqlx::query(query)
            .bind(slot.page_id)
            .bind(slot.layout_id)
            .bind(slot.sort_no)
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to insert page layout"))?;

        Ok(slot)
    }

    async fn delete(&self, page_id: i64, layout_id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dtb_page_layout WHERE page_id = ? AND layout_id = ?")
            .bind(page_id)
            .bind(layout_id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to delete page layout"))?;

        Ok(result.rows_affected() > 0)
    }
}
