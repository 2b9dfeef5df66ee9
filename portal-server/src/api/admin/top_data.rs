//! Top data management (admin)

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use shared::models::{TopData, TopDataCreate, TopDataUpdate};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::TopDataRepository;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}

async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TopData>>> {
    let repo = TopDataRepository::new(state.pool.clone());
    Ok(Json(repo.find_all_with_inactive().await?))
}

async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<TopData>> {
    let repo = TopDataRepository::new(state.pool.clone());
    let row = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Top data not found"))?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TopDataCreate>,
) -> AppResult<(StatusCode, Json<TopData>)> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("Title is required"));
    }

    let repo = TopDataRepository::new(state.pool.clone());
    let row = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<TopDataUpdate>,
) -> AppResult<Json<TopData>> {
    let repo = TopDataRepository::new(state.pool.clone());
    let row = repo.update(id, &payload, user.id).await?;
    Ok(Json(row))
}

async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = TopDataRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Top data deleted" })))
}
