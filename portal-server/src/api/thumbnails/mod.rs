//! Thumbnail API
//!
//! Multipart image upload behind the one-step admin gate; public reads
//! serve a trimmed projection. The image files themselves are served from
//! `/uploads` by the static file service.

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::get,
};

use crate::auth::middleware::authenticate_admin;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    // Body limit sits above the per-file cap so oversized uploads get the
    // handler's 400 rather than a bare 413.
    let admin = Router::new()
        .route("/", get(handler::admin_list).post(handler::create))
        .route(
            "/{id}",
            get(handler::admin_get).put(handler::update).delete(handler::delete),
        )
        .layer(DefaultBodyLimit::max(6 * 1024 * 1024))
        .route_layer(from_fn_with_state(state.clone(), authenticate_admin));

    let public = Router::new()
        .route("/", get(handler::public_list))
        .route("/search", get(handler::public_search))
        .route("/{id}", get(handler::public_get));

    Router::new().nest("/admin", admin).merge(public)
}
