//! Home Content Model
//!
//! Landing-page blocks with contact links and an embedded FAQ list. Unlike
//! the rest of the content types, deleting home content is a hard delete.

use serde::{Deserialize, Serialize};

/// FAQ entry embedded in a home content block (stored as a JSON column).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeFaq {
    pub question: String,
    pub answer: String,
}

/// Home content entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HomeContent {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub telegram_link: String,
    pub whatsapp_link: String,
    #[cfg_attr(feature = "db", sqlx(json))]
    #[serde(default)]
    pub faqs: Vec<HomeFaq>,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create home content payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeContentCreate {
    pub title: String,
    pub description: String,
    pub telegram_link: String,
    pub whatsapp_link: String,
    #[serde(default)]
    pub faqs: Vec<HomeFaq>,
}

/// Update home content payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeContentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub telegram_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub faqs: Option<Vec<HomeFaq>>,
    pub is_active: Option<bool>,
}
