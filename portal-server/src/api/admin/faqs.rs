//! FAQ management (admin)

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use shared::models::{Faq, FaqCreate, FaqUpdate};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::FaqRepository;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/subcategory/{id}", get(list_by_sub))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}

async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.pool.clone());
    Ok(Json(repo.find_all_with_inactive().await?))
}

/// GET /admin/faqs/subcategory/{id} - active FAQs in display order
async fn list_by_sub(
    State(state): State<AppState>,
    Path(sub_category_id): Path<i64>,
) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.pool.clone());
    Ok(Json(repo.find_active_by_sub(sub_category_id).await?))
}

async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.pool.clone());
    let faq = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("FAQ not found"))?;
    Ok(Json(faq))
}

async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<FaqCreate>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    if payload.question.trim().is_empty() || payload.answer.trim().is_empty() {
        return Err(AppError::bad_request("Question and answer are required"));
    }

    let repo = FaqRepository::new(state.pool.clone());
    let faq = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<FaqUpdate>,
) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.pool.clone());
    let faq = repo.update(id, &payload, user.id).await?;
    Ok(Json(faq))
}

async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = FaqRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "FAQ deleted" })))
}
