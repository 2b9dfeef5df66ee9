//! Job Posting Repository

use shared::models::{JobCategory, JobPosting};
use shared::pagination::PageQuery;
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use sqlx::types::Json;

use super::{RepoError, RepoResult, like_pattern};

/// Column values for an insert, already validated by the handler.
pub struct NewJobPosting<'a> {
    pub category: JobCategory,
    pub meta_title: &'a str,
    pub meta_description: Option<&'a str>,
    pub meta_tags: &'a [String],
    pub keywords: &'a [String],
    pub content_title: &'a str,
    pub content_description: &'a str,
}

/// Column changes for an update; None leaves the column untouched.
#[derive(Default)]
pub struct JobPostingChanges<'a> {
    pub category: Option<JobCategory>,
    pub meta_title: Option<&'a str>,
    pub meta_description: Option<&'a str>,
    pub meta_tags: Option<&'a [String]>,
    pub keywords: Option<&'a [String]>,
    pub content_title: Option<&'a str>,
    pub content_description: Option<&'a str>,
    pub is_active: Option<bool>,
}

#[derive(Clone)]
pub struct JobPostingRepository {
    pool: SqlitePool,
}

impl JobPostingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<JobPosting>> {
        let job = sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    /// Paginated listing. `category` narrows to one section; `active_only`
    /// is set for the public surface.
    pub async fn paginate(
        &self,
        query: &PageQuery,
        category: Option<JobCategory>,
        active_only: bool,
    ) -> RepoResult<(Vec<JobPosting>, i64)> {
        let mut conditions: Vec<String> = Vec::new();
        if active_only {
            conditions.push("is_active = 1".to_string());
        }
        if category.is_some() {
            conditions.push("category = ?".to_string());
        }
        let has_search = query.search.as_deref().is_some_and(|s| !s.is_empty());
        if has_search {
            conditions.push(
                r#"(meta_title LIKE ? ESCAPE '\' OR content_title LIKE ? ESCAPE '\')"#.to_string(),
            );
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let pattern = query.search.as_deref().map(like_pattern);

        let count_sql = format!("SELECT COUNT(*) FROM job_postings {where_clause}");
        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        if let Some(cat) = category {
            count_query = count_query.bind(cat.as_str());
        }
        if let Some(ref p) = pattern {
            count_query = count_query.bind(p).bind(p);
        }
        let (total,) = count_query.fetch_one(&self.pool).await?;

        let page_sql = format!(
            "SELECT * FROM job_postings {where_clause} ORDER BY created_at DESC LIMIT ? OFFSET ?"
        );
        let mut page_query = sqlx::query_as::<_, JobPosting>(&page_sql);
        if let Some(cat) = category {
            page_query = page_query.bind(cat.as_str());
        }
        if let Some(ref p) = pattern {
            page_query = page_query.bind(p).bind(p);
        }
        let rows = page_query
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    pub async fn create(&self, data: &NewJobPosting<'_>, created_by: i64) -> RepoResult<JobPosting> {
        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO job_postings (
                id, category, meta_title, meta_description, meta_tags, keywords,
                content_title, content_description, is_active, created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.category.as_str())
        .bind(data.meta_title)
        .bind(data.meta_description)
        .bind(Json(data.meta_tags))
        .bind(Json(data.keywords))
        .bind(data.content_title)
        .bind(data.content_description)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create job posting".to_string()))
    }

    pub async fn update(
        &self,
        id: i64,
        changes: &JobPostingChanges<'_>,
        updated_by: i64,
    ) -> RepoResult<JobPosting> {
        let result = sqlx::query(
            r#"
            UPDATE job_postings SET
                category = COALESCE(?, category),
                meta_title = COALESCE(?, meta_title),
                meta_description = COALESCE(?, meta_description),
                meta_tags = COALESCE(?, meta_tags),
                keywords = COALESCE(?, keywords),
                content_title = COALESCE(?, content_title),
                content_description = COALESCE(?, content_description),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.category.map(|c| c.as_str()))
        .bind(changes.meta_title)
        .bind(changes.meta_description)
        .bind(changes.meta_tags.map(Json))
        .bind(changes.keywords.map(Json))
        .bind(changes.content_title)
        .bind(changes.content_description)
        .bind(changes.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Job posting {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Job posting {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE job_postings SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Job posting {id} not found")));
        }
        Ok(())
    }
}
