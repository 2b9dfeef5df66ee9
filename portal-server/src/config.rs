//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | DATABASE_PATH | portal.db | SQLite database file |
//! | JWT_SECRET | (dev fallback) | HS256 signing secret |
//! | JWT_EXPIRY_HOURS | 24 | Token lifetime |
//! | UPLOAD_DIR | uploads | Directory for uploaded images |
//!
//! A `.env` file is honored via dotenvy before this is read.

/// Development fallback for JWT_SECRET. Keeps a fresh checkout runnable,
/// but every token signed with it is forgeable; main() warns loudly when
/// this is in effect.
pub const DEV_JWT_SECRET: &str = "portal-dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub upload_dir: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "portal.db".into()),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.into()),
            jwt_expiry_hours: std::env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(24),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        }
    }

    /// True when no JWT_SECRET was configured and the dev fallback is in use.
    pub fn uses_fallback_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
