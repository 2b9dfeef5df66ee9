//! Thumbnail Model
//!
//! Uploaded image cards. The stored file lives under the upload dir; the
//! record keeps both the serving path and the original file metadata.

use serde::{Deserialize, Serialize};

/// Thumbnail entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Thumbnail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Serving path, e.g. `/uploads/<stored name>`.
    pub image_url: String,
    pub original_file_name: String,
    pub file_size: i64,
    pub mime_type: String,
    /// Optional external link the card points at.
    pub url: Option<String>,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Trimmed projection for the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailPublic {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub url: Option<String>,
    pub created_at: i64,
}

impl From<Thumbnail> for ThumbnailPublic {
    fn from(t: Thumbnail) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            image_url: t.image_url,
            url: t.url,
            created_at: t.created_at,
        }
    }
}
