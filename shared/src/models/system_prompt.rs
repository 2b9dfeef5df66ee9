//! System Prompt Model
//!
//! Singleton: at most one active prompt at a time.

use serde::{Deserialize, Serialize};

/// System prompt entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SystemPrompt {
    pub id: i64,
    pub prompt: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create system prompt payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemPromptCreate {
    pub prompt: String,
    pub description: Option<String>,
}

/// Update system prompt payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemPromptUpdate {
    pub prompt: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
