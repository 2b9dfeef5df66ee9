//! FAQ Model

use serde::{Deserialize, Serialize};

/// FAQ entity, ordered within its sub category by `sort_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Faq {
    pub id: i64,
    pub sub_category_id: i64,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqCreate {
    pub sub_category_id: i64,
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i32>,
}

/// Update FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
