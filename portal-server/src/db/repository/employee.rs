//! Employee Repository

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all active employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE is_active = 1 ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let emp = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(emp)
    }

    pub async fn find_by_login_id(&self, login_id: &str) -> RepoResult<Option<Employee>> {
        let emp = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE login_id = ?")
            .bind(login_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(emp)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let emp = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(emp)
    }

    /// Create a new employee. `password_hash` is the already-hashed secret;
    /// `created_by` is the admin performing the creation.
    pub async fn create(
        &self,
        data: &EmployeeCreate,
        password_hash: &str,
        created_by: i64,
    ) -> RepoResult<Employee> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Employee with this email already exists".to_string(),
            ));
        }
        if self.find_by_login_id(&data.login_id).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Employee with this login ID already exists".to_string(),
            ));
        }

        let id = snowflake_id();
        let now = now_millis();

        sqlx::query(
            r#"
            INSERT INTO employees (id, name, email, login_id, password_hash, is_active, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 1, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.login_id)
        .bind(password_hash)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id,
            name: data.name.clone(),
            email: data.email.clone(),
            login_id: data.login_id.clone(),
            password_hash: password_hash.to_string(),
            is_active: true,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Update an employee. `password_hash` is the re-hashed password when
    /// the payload carries one.
    pub async fn update(
        &self,
        id: i64,
        data: &EmployeeUpdate,
        password_hash: Option<&str>,
    ) -> RepoResult<Employee> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

        if let Some(ref new_email) = data.email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(
                "Employee with this email already exists".to_string(),
            ));
        }

        sqlx::query(
            r#"
            UPDATE employees SET
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                password_hash = COALESCE(?, password_hash),
                is_active = COALESCE(?, is_active),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(password_hash)
        .bind(data.is_active)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }
}
