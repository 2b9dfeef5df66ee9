//! Category Models
//!
//! Two-level hierarchy: main categories group sub categories; sub
//! categories carry the SEO/content fields the portal renders.

use serde::{Deserialize, Serialize};

/// Main category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MainCategory {
    pub id: i64,
    pub title: String,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create main category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainCategoryCreate {
    pub title: String,
}

/// Update main category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainCategoryUpdate {
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

/// Sub category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SubCategory {
    pub id: i64,
    pub main_category_id: i64,
    pub meta_title: String,
    pub meta_description: Option<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    #[serde(default)]
    pub keywords: Vec<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    #[serde(default)]
    pub tags: Vec<String>,
    pub content_title: String,
    pub content_description: Option<String>,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,

    /// Parent title, filled when the query joins main_categories.
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category_title: Option<String>,
}

/// Create sub category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryCreate {
    pub main_category_id: i64,
    pub meta_title: String,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content_title: String,
    pub content_description: Option<String>,
}

/// Update sub category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryUpdate {
    pub main_category_id: Option<i64>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub content_title: Option<String>,
    pub content_description: Option<String>,
    pub is_active: Option<bool>,
}
