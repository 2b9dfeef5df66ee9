//! Home Content Repository
//!
//! The only hard-deleted content type.

use shared::models::{HomeContent, HomeContentCreate, HomeContentUpdate};
use shared::pagination::PageQuery;
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use sqlx::types::Json;

use super::{RepoError, RepoResult, like_pattern};

#[derive(Clone)]
pub struct HomeContentRepository {
    pool: SqlitePool,
}

impl HomeContentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<HomeContent>> {
        let content = sqlx::query_as::<_, HomeContent>("SELECT * FROM home_contents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(content)
    }

    /// Most recent active block, for the public landing page.
    pub async fn find_active(&self) -> RepoResult<Option<HomeContent>> {
        let content = sqlx::query_as::<_, HomeContent>(
            "SELECT * FROM home_contents WHERE is_active = 1 ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(content)
    }

    /// Paginated page plus total count, optionally filtered by a title
    /// substring.
    pub async fn paginate(&self, query: &PageQuery) -> RepoResult<(Vec<HomeContent>, i64)> {
        match query.search.as_deref().filter(|s| !s.is_empty()) {
            Some(term) => {
                let pattern = like_pattern(term);
                let (total,): (i64,) = sqlx::query_as(
                    r#"SELECT COUNT(*) FROM home_contents WHERE title LIKE ? ESCAPE '\'"#,
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

                let rows = sqlx::query_as::<_, HomeContent>(
                    r#"SELECT * FROM home_contents WHERE title LIKE ? ESCAPE '\'
                    ORDER BY created_at DESC LIMIT ? OFFSET ?"#,
                )
                .bind(&pattern)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok((rows, total))
            }
            None => {
                let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM home_contents")
                    .fetch_one(&self.pool)
                    .await?;

                let rows = sqlx::query_as::<_, HomeContent>(
                    "SELECT * FROM home_contents ORDER BY created_at DESC LIMIT ? OFFSET ?",
                )
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok((rows, total))
            }
        }
    }

    pub async fn create(&self, data: &HomeContentCreate, created_by: i64) -> RepoResult<HomeContent> {
        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO home_contents (id, title, description, telegram_link, whatsapp_link, faqs, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.telegram_link)
        .bind(&data.whatsapp_link)
        .bind(Json(&data.faqs))
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(HomeContent {
            id,
            title: data.title.clone(),
            description: data.description.clone(),
            telegram_link: data.telegram_link.clone(),
            whatsapp_link: data.whatsapp_link.clone(),
            faqs: data.faqs.clone(),
            is_active: true,
            created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        data: &HomeContentUpdate,
        updated_by: i64,
    ) -> RepoResult<HomeContent> {
        let result = sqlx::query(
            r#"
            UPDATE home_contents SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                telegram_link = COALESCE(?, telegram_link),
                whatsapp_link = COALESCE(?, whatsapp_link),
                faqs = COALESCE(?, faqs),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.telegram_link)
        .bind(&data.whatsapp_link)
        .bind(data.faqs.as_ref().map(Json))
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Home content {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Home content {id} not found")))
    }

    /// Hard delete.
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM home_contents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Home content {id} not found")));
        }
        Ok(())
    }
}
