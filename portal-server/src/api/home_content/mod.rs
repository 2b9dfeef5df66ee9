//! Home content API
//!
//! Admin CRUD behind the one-step admin gate, public reads open.

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
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id).put(handler::update).delete(handler::delete),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate_admin));

    let public = Router::new()
        .route("/active", get(handler::public_active))
        .route("/all", get(handler::public_all));

    Router::new().nest("/admin", admin).nest("/public", public)
}
