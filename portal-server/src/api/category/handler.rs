//! Public category handlers
//!
//! Active records only. Soft-deleted content disappears from every route
//! here without affecting the admin view.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::models::{Faq, MainCategory, SubCategory, TopData};

use crate::api::SearchQuery;
use crate::common::{AppError, AppResult};
use crate::db::repository::{
    FaqRepository, MainCategoryRepository, SubCategoryRepository, TopDataRepository,
};
use crate::state::AppState;

// ── Main categories ──

pub async fn list_main(State(state): State<AppState>) -> AppResult<Json<Vec<MainCategory>>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_active().await?))
}

pub async fn get_main(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MainCategory>> {
    let repo = MainCategoryRepository::new(state.pool.clone());
    let cat = repo
        .find_by_id(id)
        .await?
        .filter(|c| c.is_active)
        .ok_or_else(|| AppError::not_found("Main category not found"))?;
    Ok(Json(cat))
}

// ── Sub categories ──

pub async fn list_sub(State(state): State<AppState>) -> AppResult<Json<Vec<SubCategory>>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_active().await?))
}

pub async fn list_sub_by_main(
    State(state): State<AppState>,
    Path(main_id): Path<i64>,
) -> AppResult<Json<Vec<SubCategory>>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_active_by_main(main_id).await?))
}

pub async fn get_sub(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SubCategory>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    let sub = repo
        .find_by_id(id)
        .await?
        .filter(|s| s.is_active)
        .ok_or_else(|| AppError::not_found("Sub category not found"))?;
    Ok(Json(sub))
}

pub async fn search_sub(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<SubCategory>>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => Ok(Json(repo.search(term).await?)),
        None => Ok(Json(repo.find_active().await?)),
    }
}

// ── Top data ──

pub async fn list_top_data(State(state): State<AppState>) -> AppResult<Json<Vec<TopData>>> {
    let repo = TopDataRepository::new(state.pool.clone());
    Ok(Json(repo.find_active().await?))
}

pub async fn get_top_data(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TopData>> {
    let repo = TopDataRepository::new(state.pool.clone());
    let row = repo
        .find_by_id(id)
        .await?
        .filter(|t| t.is_active)
        .ok_or_else(|| AppError::not_found("Top data not found"))?;
    Ok(Json(row))
}

pub async fn search_top_data(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<TopData>>> {
    let repo = TopDataRepository::new(state.pool.clone());
    match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => Ok(Json(repo.search(term).await?)),
        None => Ok(Json(repo.find_active().await?)),
    }
}

// ── FAQs ──

pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.pool.clone());
    Ok(Json(repo.find_active().await?))
}

pub async fn list_faqs_by_sub(
    State(state): State<AppState>,
    Path(sub_id): Path<i64>,
) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.pool.clone());
    Ok(Json(repo.find_active_by_sub(sub_id).await?))
}

pub async fn get_faq(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.pool.clone());
    let faq = repo
        .find_by_id(id)
        .await?
        .filter(|f| f.is_active)
        .ok_or_else(|| AppError::not_found("FAQ not found"))?;
    Ok(Json(faq))
}

pub async fn search_faqs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.pool.clone());
    match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => Ok(Json(repo.search(term).await?)),
        None => Ok(Json(repo.find_active().await?)),
    }
}
