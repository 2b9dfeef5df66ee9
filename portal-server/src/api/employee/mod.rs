//! Employee API
//!
//! Login is open; the content routes sit behind the one-step employee
//! gate. Employees may read and edit sub categories, top data and FAQs,
//! but never create or delete them.

mod handler;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::auth::middleware::authenticate_employee;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/categories/sub", get(handler::list_sub_categories))
        .route(
            "/categories/sub/{id}",
            get(handler::get_sub_category).put(handler::update_sub_category),
        )
        .route("/topdata", get(handler::list_top_data))
        .route(
            "/topdata/{id}",
            get(handler::get_top_data).put(handler::update_top_data),
        )
        .route("/faqs", get(handler::list_faqs))
        .route("/faqs/subcategory/{id}", get(handler::list_faqs_by_sub))
        .route("/faqs/{id}", get(handler::get_faq).put(handler::update_faq))
        .route_layer(from_fn_with_state(state.clone(), authenticate_employee));

    Router::new()
        .route("/login", post(handler::login))
        .merge(gated)
}
