//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::common::AppError;
use crate::config::Config;
use crate::db::DbService;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    /// Open the database, run migrations, and build the token service.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Self::with_pool(config, db.pool)
    }

    /// Build state over an existing pool. Used by tests with an in-memory
    /// database.
    pub fn with_pool(config: Config, pool: SqlitePool) -> Result<Self, AppError> {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiry_hours);
        Ok(Self {
            config: Arc::new(config),
            pool,
            jwt: Arc::new(jwt),
        })
    }
}
