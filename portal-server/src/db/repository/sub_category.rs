//! Sub Category Repository
//!
//! List queries join the parent so responses can carry the main category
//! title without a second round trip.

use shared::models::{SubCategory, SubCategoryCreate, SubCategoryUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use sqlx::types::Json;

use super::{RepoError, RepoResult, like_pattern};

const SELECT_JOINED: &str = r#"
    SELECT s.*, m.title AS main_category_title
    FROM sub_categories s
    JOIN main_categories m ON m.id = s.main_category_id
"#;

#[derive(Clone)]
pub struct SubCategoryRepository {
    pool: SqlitePool,
}

impl SubCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<SubCategory>> {
        let sql = format!("{SELECT_JOINED} ORDER BY s.created_at DESC");
        let subs = sqlx::query_as::<_, SubCategory>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(subs)
    }

    pub async fn find_active(&self) -> RepoResult<Vec<SubCategory>> {
        let sql = format!("{SELECT_JOINED} WHERE s.is_active = 1 ORDER BY s.created_at DESC");
        let subs = sqlx::query_as::<_, SubCategory>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(subs)
    }

    /// Active sub categories under one main category.
    pub async fn find_active_by_main(&self, main_category_id: i64) -> RepoResult<Vec<SubCategory>> {
        let sql = format!(
            "{SELECT_JOINED} WHERE s.main_category_id = ? AND s.is_active = 1 ORDER BY s.created_at DESC"
        );
        let subs = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(main_category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(subs)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubCategory>> {
        let sql = format!("{SELECT_JOINED} WHERE s.id = ?");
        let sub = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(sub)
    }

    /// Case-insensitive substring search over titles, active records only.
    pub async fn search(&self, term: &str) -> RepoResult<Vec<SubCategory>> {
        let pattern = like_pattern(term);
        let sql = format!(
            r#"{SELECT_JOINED}
            WHERE s.is_active = 1
              AND (s.meta_title LIKE ? ESCAPE '\' OR s.content_title LIKE ? ESCAPE '\')
            ORDER BY s.created_at DESC"#
        );
        let subs = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(subs)
    }

    pub async fn create(&self, data: &SubCategoryCreate, created_by: i64) -> RepoResult<SubCategory> {
        let parent: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM main_categories WHERE id = ?")
                .bind(data.main_category_id)
                .fetch_optional(&self.pool)
                .await?;
        if parent.is_none() {
            return Err(RepoError::Validation(
                "Main category not found".to_string(),
            ));
        }

        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO sub_categories (
                id, main_category_id, meta_title, meta_description, keywords, tags,
                content_title, content_description, is_active, created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.main_category_id)
        .bind(&data.meta_title)
        .bind(&data.meta_description)
        .bind(Json(&data.keywords))
        .bind(Json(&data.tags))
        .bind(&data.content_title)
        .bind(&data.content_description)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create sub category".to_string()))
    }

    pub async fn update(
        &self,
        id: i64,
        data: &SubCategoryUpdate,
        updated_by: i64,
    ) -> RepoResult<SubCategory> {
        if let Some(main_id) = data.main_category_id {
            let parent: Option<(i64,)> =
                sqlx::query_as("SELECT id FROM main_categories WHERE id = ?")
                    .bind(main_id)
                    .fetch_optional(&self.pool)
                    .await?;
            if parent.is_none() {
                return Err(RepoError::Validation(
                    "Main category not found".to_string(),
                ));
            }
        }

        let result = sqlx::query(
            r#"
            UPDATE sub_categories SET
                main_category_id = COALESCE(?, main_category_id),
                meta_title = COALESCE(?, meta_title),
                meta_description = COALESCE(?, meta_description),
                keywords = COALESCE(?, keywords),
                tags = COALESCE(?, tags),
                content_title = COALESCE(?, content_title),
                content_description = COALESCE(?, content_description),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(data.main_category_id)
        .bind(&data.meta_title)
        .bind(&data.meta_description)
        .bind(data.keywords.as_ref().map(Json))
        .bind(data.tags.as_ref().map(Json))
        .bind(&data.content_title)
        .bind(&data.content_description)
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Sub category {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Sub category {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE sub_categories SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Sub category {id} not found")));
        }
        Ok(())
    }
}
