//! HTTP API
//!
//! Per-surface sub-routers assembled into one app. The admin surface uses
//! the two-step gate (authenticate + require_admin); the content routers
//! with their own `/admin` scopes use the one-step gates.

pub mod admin;
pub mod category;
pub mod employee;
pub mod health;
pub mod home_content;
pub mod jobs;
pub mod thumbnails;

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Query string for plain (non-paginated) search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// All routes, no middleware, no state.
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router(state))
        .nest("/employee", employee::router(state))
        .nest("/category", category::router())
        .nest("/home-content", home_content::router(state))
        .nest("/latest-jobs", jobs::router(state))
        .nest("/thumbnails", thumbnails::router(state))
        .route("/system-prompt/public", get(admin::system_prompt::get_active))
        .merge(health::router())
}

/// Fully configured application: routes, static uploads, CORS and tracing.
pub fn build_app(state: AppState) -> Router {
    let uploads = ServeDir::new(state.config.upload_dir.clone());

    build_router(&state)
        .nest_service("/uploads", uploads)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
