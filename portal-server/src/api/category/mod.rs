//! Public category API (no gate)

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/main", get(handler::list_main))
        .route("/main/{id}", get(handler::get_main))
        .route("/sub", get(handler::list_sub))
        .route("/sub/search", get(handler::search_sub))
        .route("/sub/main/{id}", get(handler::list_sub_by_main))
        .route("/sub/{id}", get(handler::get_sub))
        .route("/topdata", get(handler::list_top_data))
        .route("/topdata/search", get(handler::search_top_data))
        .route("/topdata/{id}", get(handler::get_top_data))
        .route("/faqs", get(handler::list_faqs))
        .route("/faqs/search", get(handler::search_faqs))
        .route("/faqs/subcategory/{id}", get(handler::list_faqs_by_sub))
        .route("/faqs/{id}", get(handler::get_faq))
}
