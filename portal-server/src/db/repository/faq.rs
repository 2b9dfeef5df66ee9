//! FAQ Repository

use shared::models::{Faq, FaqCreate, FaqUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, like_pattern};

#[derive(Clone)]
pub struct FaqRepository {
    pool: SqlitePool,
}

impl FaqRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(
            "SELECT * FROM faqs ORDER BY sub_category_id, sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(faqs)
    }

    pub async fn find_active(&self) -> RepoResult<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(
            "SELECT * FROM faqs WHERE is_active = 1 ORDER BY sub_category_id, sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(faqs)
    }

    /// Active FAQs for one sub category, in display order.
    pub async fn find_active_by_sub(&self, sub_category_id: i64) -> RepoResult<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(
            "SELECT * FROM faqs WHERE sub_category_id = ? AND is_active = 1 ORDER BY sort_order, created_at",
        )
        .bind(sub_category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(faqs)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Faq>> {
        let faq = sqlx::query_as::<_, Faq>("SELECT * FROM faqs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(faq)
    }

    pub async fn search(&self, term: &str) -> RepoResult<Vec<Faq>> {
        let pattern = like_pattern(term);
        let faqs = sqlx::query_as::<_, Faq>(
            r#"SELECT * FROM faqs
            WHERE is_active = 1 AND (question LIKE ? ESCAPE '\' OR answer LIKE ? ESCAPE '\')
            ORDER BY sort_order, created_at"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(faqs)
    }

    pub async fn create(&self, data: &FaqCreate, created_by: i64) -> RepoResult<Faq> {
        let parent: Option<(i64,)> = sqlx::query_as("SELECT id FROM sub_categories WHERE id = ?")
            .bind(data.sub_category_id)
            .fetch_optional(&self.pool)
            .await?;
        if parent.is_none() {
            return Err(RepoError::Validation("Sub category not found".to_string()));
        }

        let id = snowflake_id();
        let now = now_millis();
        let sort_order = data.sort_order.unwrap_or(0);

        sqlx::query(
            r#"
            INSERT INTO faqs (id, sub_category_id, question, answer, sort_order, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(data.sub_category_id)
        .bind(&data.question)
        .bind(&data.answer)
        .bind(sort_order)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Faq {
            id,
            sub_category_id: data.sub_category_id,
            question: data.question.clone(),
            answer: data.answer.clone(),
            sort_order,
            is_active: true,
            created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: i64, data: &FaqUpdate, updated_by: i64) -> RepoResult<Faq> {
        let result = sqlx::query(
            r#"
            UPDATE faqs SET
                question = COALESCE(?, question),
                answer = COALESCE(?, answer),
                sort_order = COALESCE(?, sort_order),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.sort_order)
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("FAQ {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("FAQ {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE faqs SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("FAQ {id} not found")));
        }
        Ok(())
    }
}
