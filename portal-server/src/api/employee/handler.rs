//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use tracing::warn;

use shared::models::{
    EmployeeAuthResponse, EmployeeLoginRequest, Faq, FaqUpdate, SubCategory, SubCategoryUpdate,
    TopData, TopDataUpdate,
};

use crate::auth::CurrentUser;
use crate::auth::password;
use crate::common::{AppError, AppResult};
use crate::db::repository::{
    EmployeeRepository, FaqRepository, SubCategoryRepository, TopDataRepository,
};
use crate::state::AppState;

/// POST /employee/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeLoginRequest>,
) -> AppResult<Json<EmployeeAuthResponse>> {
    let repo = EmployeeRepository::new(state.pool.clone());

    let employee = match repo.find_by_login_id(payload.login_id.trim()).await? {
        Some(e) => e,
        None => {
            warn!(login_id = %payload.login_id, "employee_login_failed_unknown");
            return Err(AppError::unauthorized("Invalid credentials"));
        }
    };

    let ok = password::verify_password(&payload.password, &employee.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify failed: {e}")))?;
    if !ok {
        warn!(employee_id = employee.id, "employee_login_failed_bad_password");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    if !employee.is_active {
        warn!(employee_id = employee.id, "employee_login_rejected_inactive");
        return Err(AppError::unauthorized("Account is deactivated"));
    }

    let token = state
        .jwt
        .issue(employee.id, &employee.login_id, "employee")
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(EmployeeAuthResponse {
        message: "Login successful".to_string(),
        token,
        employee,
    }))
}

// ── Sub categories (read/update only) ──

pub async fn list_sub_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubCategory>>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_active().await?))
}

pub async fn get_sub_category(
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

pub async fn update_sub_category(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<SubCategoryUpdate>,
) -> AppResult<Json<SubCategory>> {
    let repo = SubCategoryRepository::new(state.pool.clone());
    let sub = repo.update(id, &payload, user.id).await?;
    Ok(Json(sub))
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
        .ok_or_else(|| AppError::not_found("Top data not found"))?;
    Ok(Json(row))
}

pub async fn update_top_data(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<TopDataUpdate>,
) -> AppResult<Json<TopData>> {
    let repo = TopDataRepository::new(state.pool.clone());
    let row = repo.update(id, &payload, user.id).await?;
    Ok(Json(row))
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
        .ok_or_else(|| AppError::not_found("FAQ not found"))?;
    Ok(Json(faq))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<FaqUpdate>,
) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.pool.clone());
    let faq = repo.update(id, &payload, user.id).await?;
    Ok(Json(faq))
}
