//! User Repository
//!
//! Admin-capable accounts. Passwords arrive pre-hashed; this layer never
//! sees cleartext.

use shared::models::{User, UserRole};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Create an admin account. Duplicate email is rejected here so the
    /// handler can return a 400 before hitting the UNIQUE constraint.
    pub async fn create_admin(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<User> {
        if self.find_by_email(email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Admin with this email already exists".to_string(),
            ));
        }

        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, 'admin', 1, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::Admin,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Flip the active flag. Outstanding tokens for a deactivated admin are
    /// rejected at the gate on their next request.
    pub async fn set_active(&self, id: i64, is_active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(now_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("User {id} not found")));
        }
        Ok(())
    }
}
