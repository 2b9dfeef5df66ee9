//! Thumbnail Repository
//!
//! File handling (save/replace/remove) lives in the handler; this layer
//! only tracks the metadata rows.

use shared::models::Thumbnail;
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, like_pattern};

/// Metadata for a freshly stored upload.
pub struct NewThumbnail<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub original_file_name: &'a str,
    pub file_size: i64,
    pub mime_type: &'a str,
    pub url: Option<&'a str>,
}

/// Column changes for an update; file fields are set together when the
/// image was replaced.
#[derive(Default)]
pub struct ThumbnailChanges<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub url: Option<&'a str>,
    pub is_active: Option<bool>,
    pub image_url: Option<&'a str>,
    pub original_file_name: Option<&'a str>,
    pub file_size: Option<i64>,
    pub mime_type: Option<&'a str>,
}

#[derive(Clone)]
pub struct ThumbnailRepository {
    pool: SqlitePool,
}

impl ThumbnailRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<Thumbnail>> {
        let thumbs =
            sqlx::query_as::<_, Thumbnail>("SELECT * FROM thumbnails ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(thumbs)
    }

    pub async fn find_active(&self) -> RepoResult<Vec<Thumbnail>> {
        let thumbs = sqlx::query_as::<_, Thumbnail>(
            "SELECT * FROM thumbnails WHERE is_active = 1 ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(thumbs)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Thumbnail>> {
        let thumb = sqlx::query_as::<_, Thumbnail>("SELECT * FROM thumbnails WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(thumb)
    }

    pub async fn search(&self, term: &str) -> RepoResult<Vec<Thumbnail>> {
        let pattern = like_pattern(term);
        let thumbs = sqlx::query_as::<_, Thumbnail>(
            r#"SELECT * FROM thumbnails
            WHERE is_active = 1 AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')
            ORDER BY created_at DESC"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(thumbs)
    }

    pub async fn create(&self, data: &NewThumbnail<'_>, created_by: i64) -> RepoResult<Thumbnail> {
        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO thumbnails (
                id, title, description, image_url, original_file_name, file_size,
                mime_type, url, is_active, created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.image_url)
        .bind(data.original_file_name)
        .bind(data.file_size)
        .bind(data.mime_type)
        .bind(data.url)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create thumbnail".to_string()))
    }

    pub async fn update(
        &self,
        id: i64,
        changes: &ThumbnailChanges<'_>,
        updated_by: i64,
    ) -> RepoResult<Thumbnail> {
        let result = sqlx::query(
            r#"
            UPDATE thumbnails SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                url = COALESCE(?, url),
                is_active = COALESCE(?, is_active),
                image_url = COALESCE(?, image_url),
                original_file_name = COALESCE(?, original_file_name),
                file_size = COALESCE(?, file_size),
                mime_type = COALESCE(?, mime_type),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.url)
        .bind(changes.is_active)
        .bind(changes.image_url)
        .bind(changes.original_file_name)
        .bind(changes.file_size)
        .bind(changes.mime_type)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Thumbnail {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Thumbnail {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE thumbnails SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Thumbnail {id} not found")));
        }
        Ok(())
    }
}
