//! Data models
//!
//! Shared between portal-server and frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); timestamps are unix
//! milliseconds.

pub mod auth;
pub mod category;
pub mod employee;
pub mod faq;
pub mod home_content;
pub mod job_posting;
pub mod system_prompt;
pub mod thumbnail;
pub mod top_data;
pub mod user;

// Re-exports
pub use auth::*;
pub use category::*;
pub use employee::*;
pub use faq::*;
pub use home_content::*;
pub use job_posting::*;
pub use system_prompt::*;
pub use thumbnail::*;
pub use top_data::*;
pub use user::*;
