//! Job posting handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{JobCategory, JobPosting, JobPostingCreate, JobPostingUpdate};
use shared::pagination::{PageQuery, Paginated};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::job_posting::{JobPostingChanges, NewJobPosting};
use crate::db::repository::JobPostingRepository;
use crate::state::AppState;

/// Pagination plus an optional category filter. Kept flat because axum's
/// Query extractor does not handle flattened structs.
#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl JobListQuery {
    fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(10),
            search: self.search.clone(),
        }
    }

    fn category(&self) -> Result<Option<JobCategory>, AppError> {
        match self.category.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => parse_category(s).map(Some),
            None => Ok(None),
        }
    }
}

fn parse_category(s: &str) -> Result<JobCategory, AppError> {
    JobCategory::parse(s).ok_or_else(|| {
        let allowed: Vec<&str> = JobCategory::ALL.iter().map(|c| c.as_str()).collect();
        AppError::bad_request(format!("Invalid category. Allowed: {}", allowed.join(", ")))
    })
}

/// POST /latest-jobs/admin
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<JobPostingCreate>,
) -> AppResult<(StatusCode, Json<JobPosting>)> {
    if payload.meta_title.trim().is_empty()
        || payload.content_title.trim().is_empty()
        || payload.content_description.trim().is_empty()
    {
        return Err(AppError::bad_request("All fields are required"));
    }
    let category = parse_category(&payload.category)?;

    let repo = JobPostingRepository::new(state.pool.clone());
    let job = repo
        .create(
            &NewJobPosting {
                category,
                meta_title: payload.meta_title.trim(),
                meta_description: payload.meta_description.as_deref(),
                meta_tags: &payload.meta_tags,
                keywords: &payload.keywords,
                content_title: payload.content_title.trim(),
                content_description: &payload.content_description,
            },
            user.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /latest-jobs/admin - paginated, includes inactive
pub async fn admin_list(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<Paginated<JobPosting>>> {
    let category = query.category()?;
    let page = query.page_query();

    let repo = JobPostingRepository::new(state.pool.clone());
    let (rows, total) = repo.paginate(&page, category, false).await?;
    Ok(Json(Paginated::new(rows, &page, total)))
}

pub async fn admin_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobPosting>> {
    let repo = JobPostingRepository::new(state.pool.clone());
    let job = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Job posting not found"))?;
    Ok(Json(job))
}

/// PUT /latest-jobs/admin/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<JobPostingUpdate>,
) -> AppResult<Json<JobPosting>> {
    let category = match payload.category.as_deref() {
        Some(s) => Some(parse_category(s)?),
        None => None,
    };

    let repo = JobPostingRepository::new(state.pool.clone());
    let job = repo
        .update(
            id,
            &JobPostingChanges {
                category,
                meta_title: payload.meta_title.as_deref(),
                meta_description: payload.meta_description.as_deref(),
                meta_tags: payload.meta_tags.as_deref(),
                keywords: payload.keywords.as_deref(),
                content_title: payload.content_title.as_deref(),
                content_description: payload.content_description.as_deref(),
                is_active: payload.is_active,
            },
            user.id,
        )
        .await?;

    Ok(Json(job))
}

/// DELETE /latest-jobs/admin/{id} - soft delete
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = JobPostingRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Job posting deleted" })))
}

/// GET /latest-jobs/public - paginated, active only
pub async fn public_list(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<Paginated<JobPosting>>> {
    let category = query.category()?;
    let page = query.page_query();

    let repo = JobPostingRepository::new(state.pool.clone());
    let (rows, total) = repo.paginate(&page, category, true).await?;
    Ok(Json(Paginated::new(rows, &page, total)))
}

/// GET /latest-jobs/public/category/{category}
pub async fn public_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<Paginated<JobPosting>>> {
    let category = parse_category(&category)?;
    let page = query.page_query();

    let repo = JobPostingRepository::new(state.pool.clone());
    let (rows, total) = repo.paginate(&page, Some(category), true).await?;
    Ok(Json(Paginated::new(rows, &page, total)))
}

/// GET /latest-jobs/public/{id}
pub async fn public_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobPosting>> {
    let repo = JobPostingRepository::new(state.pool.clone());
    let job = repo
        .find_by_id(id)
        .await?
        .filter(|j| j.is_active)
        .ok_or_else(|| AppError::not_found("Job posting not found"))?;
    Ok(Json(job))
}
