//! Repository Module
//!
//! One repository per entity over the shared SQLite pool. Duplicate and
//! not-found checks live here, not in handlers.

// Principals
pub mod employee;
pub mod user;

// Content
pub mod faq;
pub mod home_content;
pub mod job_posting;
pub mod main_category;
pub mod sub_category;
pub mod system_prompt;
pub mod thumbnail;
pub mod top_data;

// Re-exports
pub use employee::EmployeeRepository;
pub use faq::FaqRepository;
pub use home_content::HomeContentRepository;
pub use job_posting::JobPostingRepository;
pub use main_category::MainCategoryRepository;
pub use sub_category::SubCategoryRepository;
pub use system_prompt::SystemPromptRepository;
pub use thumbnail::ThumbnailRepository;
pub use top_data::TopDataRepository;
pub use user::UserRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Build a LIKE pattern for case-insensitive substring search, escaping
/// SQL wildcards in the user's term. Queries using it must add
/// `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("abc"), "%abc%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
