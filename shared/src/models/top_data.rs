//! Top Data Model
//!
//! Highlight cards pinned under a sub category.

use serde::{Deserialize, Serialize};

/// Top data entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TopData {
    pub id: i64,
    pub sub_category_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Hex color, defaults to black when the admin omits it.
    pub color_code: String,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create top data payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDataCreate {
    pub sub_category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub color_code: Option<String>,
}

/// Update top data payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDataUpdate {
    pub sub_category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color_code: Option<String>,
    pub is_active: Option<bool>,
}
