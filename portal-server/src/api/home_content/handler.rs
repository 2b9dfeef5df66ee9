//! Home content handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use shared::models::{HomeContent, HomeContentCreate, HomeContentUpdate};
use shared::pagination::{PageQuery, Paginated};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::HomeContentRepository;
use crate::state::AppState;

fn validate_faqs(faqs: &[shared::models::HomeFaq]) -> Result<(), AppError> {
    for faq in faqs {
        if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
            return Err(AppError::bad_request(
                "Each FAQ requires a question and an answer",
            ));
        }
    }
    Ok(())
}

/// POST /home-content/admin
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<HomeContentCreate>,
) -> AppResult<(StatusCode, Json<HomeContent>)> {
    if payload.title.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.telegram_link.trim().is_empty()
        || payload.whatsapp_link.trim().is_empty()
    {
        return Err(AppError::bad_request("All fields are required"));
    }
    validate_faqs(&payload.faqs)?;

    let repo = HomeContentRepository::new(state.pool.clone());
    let content = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// GET /home-content/admin - paginated, optional title search
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Paginated<HomeContent>>> {
    let repo = HomeContentRepository::new(state.pool.clone());
    let (rows, total) = repo.paginate(&query).await?;
    Ok(Json(Paginated::new(rows, &query, total)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<HomeContent>> {
    let repo = HomeContentRepository::new(state.pool.clone());
    let content = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Home content not found"))?;
    Ok(Json(content))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<HomeContentUpdate>,
) -> AppResult<Json<HomeContent>> {
    if let Some(ref faqs) = payload.faqs {
        validate_faqs(faqs)?;
    }

    let repo = HomeContentRepository::new(state.pool.clone());
    let content = repo.update(id, &payload, user.id).await?;
    Ok(Json(content))
}

/// DELETE /home-content/admin/{id} - hard delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = HomeContentRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Home content deleted" })))
}

/// GET /home-content/public/active - most recent active block
pub async fn public_active(State(state): State<AppState>) -> AppResult<Json<HomeContent>> {
    let repo = HomeContentRepository::new(state.pool.clone());
    let content = repo
        .find_active()
        .await?
        .ok_or_else(|| AppError::not_found("Home content not found"))?;
    Ok(Json(content))
}

/// GET /home-content/public/all - paginated
pub async fn public_all(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Paginated<HomeContent>>> {
    let repo = HomeContentRepository::new(state.pool.clone());
    let (rows, total) = repo.paginate(&query).await?;
    Ok(Json(Paginated::new(rows, &query, total)))
}
