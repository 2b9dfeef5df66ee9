//! Job postings API

mod handler;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};

use crate::auth::middleware::authenticate_admin;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", get(handler::admin_list).post(handler::create))
        .route(
            "/{id}",
            get(handler::admin_get).put(handler::update).delete(handler::delete),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate_admin));

    let public = Router::new()
        .route("/", get(handler::public_list))
        .route("/category/{category}", get(handler::public_by_category))
        .route("/{id}", get(handler::public_get));

    Router::new().nest("/admin", admin).nest("/public", public)
}
