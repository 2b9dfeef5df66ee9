//! Job Posting Model

use serde::{Deserialize, Serialize};

/// Listing section a posting belongs to. Stored as TEXT with the exact
/// variant name, which is also the path segment public clients use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum JobCategory {
    Results,
    AdmitCards,
    AnswerKey,
    Syllabus,
    Admission,
    Importance,
    LatestJobs,
}

impl JobCategory {
    pub const ALL: [JobCategory; 7] = [
        JobCategory::Results,
        JobCategory::AdmitCards,
        JobCategory::AnswerKey,
        JobCategory::Syllabus,
        JobCategory::Admission,
        JobCategory::Importance,
        JobCategory::LatestJobs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Results => "Results",
            JobCategory::AdmitCards => "AdmitCards",
            JobCategory::AnswerKey => "AnswerKey",
            JobCategory::Syllabus => "Syllabus",
            JobCategory::Admission => "Admission",
            JobCategory::Importance => "Importance",
            JobCategory::LatestJobs => "LatestJobs",
        }
    }

    pub fn parse(s: &str) -> Option<JobCategory> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Job posting entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct JobPosting {
    pub id: i64,
    pub category: JobCategory,
    pub meta_title: String,
    pub meta_description: Option<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    #[serde(default)]
    pub meta_tags: Vec<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    #[serde(default)]
    pub keywords: Vec<String>,
    pub content_title: String,
    pub content_description: String,
    pub is_active: bool,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create job posting payload. Category arrives as a raw string so the
/// handler can reject unknown values with a 400 instead of a deserialize
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingCreate {
    pub category: String,
    pub meta_title: String,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub content_title: String,
    pub content_description: String,
}

/// Update job posting payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingUpdate {
    pub category: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_tags: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub content_title: Option<String>,
    pub content_description: Option<String>,
    pub is_active: Option<bool>,
}
