//! Main Category Repository

use shared::models::{MainCategory, MainCategoryCreate, MainCategoryUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct MainCategoryRepository {
    pool: SqlitePool,
}

impl MainCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All categories including soft-deleted ones (admin view).
    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<MainCategory>> {
        let cats = sqlx::query_as::<_, MainCategory>(
            "SELECT * FROM main_categories ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cats)
    }

    /// Active categories only (public view).
    pub async fn find_active(&self) -> RepoResult<Vec<MainCategory>> {
        let cats = sqlx::query_as::<_, MainCategory>(
            "SELECT * FROM main_categories WHERE is_active = 1 ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cats)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<MainCategory>> {
        let cat = sqlx::query_as::<_, MainCategory>("SELECT * FROM main_categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cat)
    }

    pub async fn create(&self, data: &MainCategoryCreate, created_by: i64) -> RepoResult<MainCategory> {
        let dup: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM main_categories WHERE title = ?")
                .bind(&data.title)
                .fetch_optional(&self.pool)
                .await?;
        if dup.is_some() {
            return Err(RepoError::Duplicate(
                "Main category with this title already exists".to_string(),
            ));
        }

        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO main_categories (id, title, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(MainCategory {
            id,
            title: data.title.clone(),
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
        data: &MainCategoryUpdate,
        updated_by: i64,
    ) -> RepoResult<MainCategory> {
        let result = sqlx::query(
            r#"
            UPDATE main_categories SET
                title = COALESCE(?, title),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Main category {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Main category {id} not found")))
    }

    /// Soft delete: flip is_active off.
    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE main_categories SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Main category {id} not found")));
        }
        Ok(())
    }
}
