//! System Prompt Repository
//!
//! The prompt is a singleton: creating a second active prompt is rejected.

use shared::models::{SystemPrompt, SystemPromptCreate, SystemPromptUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct SystemPromptRepository {
    pool: SqlitePool,
}

impl SystemPromptRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_active(&self) -> RepoResult<Option<SystemPrompt>> {
        let prompt = sqlx::query_as::<_, SystemPrompt>(
            "SELECT * FROM system_prompts WHERE is_active = 1 ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(prompt)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<SystemPrompt>> {
        let prompt = sqlx::query_as::<_, SystemPrompt>("SELECT * FROM system_prompts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(prompt)
    }

    pub async fn create(&self, data: &SystemPromptCreate, created_by: i64) -> RepoResult<SystemPrompt> {
        if self.find_active().await?.is_some() {
            return Err(RepoError::Duplicate(
                "An active system prompt already exists".to_string(),
            ));
        }

        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO system_prompts (id, prompt, description, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&data.prompt)
        .bind(&data.description)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(SystemPrompt {
            id,
            prompt: data.prompt.clone(),
            description: data.description.clone(),
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
        data: &SystemPromptUpdate,
        updated_by: i64,
    ) -> RepoResult<SystemPrompt> {
        let result = sqlx::query(
            r#"
            UPDATE system_prompts SET
                prompt = COALESCE(?, prompt),
                description = COALESCE(?, description),
                is_active = COALESCE(?, is_active),
                updated_by = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.prompt)
        .bind(&data.description)
        .bind(data.is_active)
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("System prompt {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("System prompt {id} not found")))
    }

    pub async fn soft_delete(&self, id: i64, updated_by: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE system_prompts SET is_active = 0, updated_by = ?, updated_at = ? WHERE id = ?",
        )
        .bind(updated_by)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("System prompt {id} not found")));
        }
        Ok(())
    }
}
