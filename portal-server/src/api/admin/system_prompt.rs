//! System prompt management (admin)
//!
//! Singleton: creating a second active prompt is a 400.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use shared::models::{SystemPrompt, SystemPromptCreate, SystemPromptUpdate};

use crate::auth::CurrentUser;
use crate::common::{AppError, AppResult};
use crate::db::repository::SystemPromptRepository;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_active).post(create))
        .route("/{id}", axum::routing::put(update).delete(delete))
}

/// Also mounted ungated at /system-prompt/public; the prompt is not
/// admin-only data, only its management is.
pub(crate) async fn get_active(State(state): State<AppState>) -> AppResult<Json<SystemPrompt>> {
    let repo = SystemPromptRepository::new(state.pool.clone());
    let prompt = repo
        .find_active()
        .await?
        .ok_or_else(|| AppError::not_found("No active system prompt"))?;
    Ok(Json(prompt))
}

async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<SystemPromptCreate>,
) -> AppResult<(StatusCode, Json<SystemPrompt>)> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::bad_request("Prompt is required"));
    }

    let repo = SystemPromptRepository::new(state.pool.clone());
    let prompt = repo.create(&payload, user.id).await?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<SystemPromptUpdate>,
) -> AppResult<Json<SystemPrompt>> {
    let repo = SystemPromptRepository::new(state.pool.clone());
    let prompt = repo.update(id, &payload, user.id).await?;
    Ok(Json(prompt))
}

async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = SystemPromptRepository::new(state.pool.clone());
    repo.soft_delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "message": "System prompt deleted" })))
}
