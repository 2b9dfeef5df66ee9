//! Category management (admin)

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use shared::models::{
    MainCategory, MainCategoryCreate, MainCategoryUpdate, SubCategory, SubCategoryCreate,
    SubCategoryUpdate,
};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::{MainCategoryRepository, SubCategoryRepository};
use crate::state::AppState;

pub fn main_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_main).post(create_main))
        .route(
            "/{id}",
            get(get_main).put(update_main).delete(delete_main),
        )
}

pub fn sub_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sub).post(create_sub))
        .route("/{id}", get(get_sub).put(update_sub).delete(delete_sub))
}

// ── Main categories ──

async fn list_main(State(state): State<AppState>) -> AppResult<Json<Vec<MainCategory>>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_all_with_inactive().await?))
}

async fn get_main(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MainCategory>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    let cat = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Main category not found"))?;
    Ok(Json(cat))
}

async fn create_main(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<MainCategoryCreate>,
) -> AppResult<(StatusCode, Json<MainCategory>)> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("Title is required"));
    }

    let repo = MainCategoryRepository::new(state.pool.clone());
    let cat = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

async fn update_main(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<MainCategoryUpdate>,
) -> AppResult<Json<MainCategory>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    let cat = repo.update(id, &payload, user.id).await?;
    Ok(Json(cat))
}

async fn delete_main(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Main category deleted" })))
}

// ── Sub categories ──

async fn list_sub(State(state): State<AppState>) -> AppResult<Json<Vec<SubCategory>>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_all_with_inactive().await?))
}

async fn get_sub(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SubCategory>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    let sub = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Sub category not found"))?;
    Ok(Json(sub))
}

async fn create_sub(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<SubCategoryCreate>,
) -> AppResult<(StatusCode, Json<SubCategory>)> {
    if payload.meta_title.trim().is_empty() || payload.content_title.trim().is_empty() {
        return Err(AppError::bad_request("Meta title and content title are required"));
    }

    let repo = SubCategoryRepository::new(state.pool.clone());
    let sub = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(sub)))
}

async fn update_sub(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<SubCategoryUpdate>,
) -> AppResult<Json<SubCategory>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    let sub = repo.update(id, &payload, user.id).await?;
    Ok(Json(sub))
}

async fn delete_sub(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Sub category deleted" })))
}
