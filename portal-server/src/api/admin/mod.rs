//! Admin API
//!
//! Signup and login are open; everything else sits behind the two-step
//! gate (token check, then admin resolution against the store).

mod auth;
mod categories;
mod employees;
mod faqs;
pub(crate) mod system_prompt;
mod top_data;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::post,
};

use crate::auth::middleware::{authenticate, require_admin};
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .merge(employees::routes())
        .nest("/categories/main", categories::main_routes())
        .nest("/categories/sub", categories::sub_routes())
        .nest("/topdata", top_data::routes())
        .nest("/faqs", faqs::routes())
        .nest("/system-prompt", system_prompt::routes())
        // authenticate is added last so it runs first
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .merge(gated)
}
