//! Top Data Repository

use shared::models::{TopData, TopDataCreate, TopDataUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, like_pattern};

const DEFAULT_COLOR: &str = "#000000";

#[derive(Clone)]
pub struct TopDataRepository {
    pool: SqlitePool,
}

impl TopDataRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<TopData>> {
        let rows =
            sqlx::query_as::<_, TopData>("SELECT * FROM top_data ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    pub async fn find_active(&self) -> RepoResult<Vec<TopData>> {
        let rows = sqlx::query_as::<_, TopData>(
            "SELECT * FROM top_data WHERE is_active = 1 ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<TopData>> {
        let row = sqlx::query_as::<_, TopData>("SELECT * FROM top_data WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn search(&self, term: &str) -> RepoResult<Vec<TopData>> {
        let pattern = like_pattern(term);
        let rows = sqlx::query_as::<_, TopData>(
            r#"SELECT * FROM top_data
            WHERE is_active = 1 AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')
            ORDER BY created_at DESC"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &TopDataCreate, created_by: i64) -> RepoResult<TopData> {
        let parent: Option<(i64,)> = sqlx::query_as("SELECT id FROM sub_categories WHERE id = ?")
            .bind(data.sub_category_id)
            .fetch_optional(&self.pool)
            .await?;
        if parent.is_none() {
            return Err(RepoError::Validation("Sub category not found".to_string()));
        }

        let id = snowflake_id();
        let now = now_millis();
        let color = data.color_code.as_deref().unwrap_or(DEFAULT_COLOR);

        sqlx::query(
            r#"
            INSERT INTO top_data (id, sub_category_id, title, description, color_code, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.sub_category_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(color)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(TopData {
            id,
            sub_category_id: data.sub_category_id,
            title: data.title.clone(),
            description: data.description.clone(),
            color_code: color.to_string(),
            is_active: true,
            created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: i64, data: &TopDataUpdate, updated_by: i64) -> RepoResult<TopData> {
        let result = sqlx::query(
            r#"
            UPDATE top_data SET
                sub_category_id = COALESCE(?, sub_category_id),
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                color_code = COALESCE(?, color_code),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(data.sub_category_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.color_code)
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Top data {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Top data {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE top_data SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Top data {id} not found")));
        }
        Ok(())
    }
}
