//! Admin signup and login

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use shared::models::{AdminAuthResponse, LoginRequest, SignupRequest, UserRole};

use crate::auth::password;
use crate::common::{AppError, AppResult};
use crate::db::repository::UserRepository;
use crate::state::AppState;

/// POST /admin/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AdminAuthResponse>)> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::bad_request("All fields are required"));
    }

    let hash = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hash failed: {e}")))?;

    let repo = UserRepository::new(state.pool.clone());
    let admin = repo
        .create_admin(payload.name.trim(), payload.email.trim(), &hash)
        .await?;

    let token = state
        .jwt
        .issue(admin.id, &admin.email, UserRole::Admin.as_str())
        .map_err(|e| AppError::internal(e.to_string()))?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Admin account created");

    Ok((
        StatusCode::CREATED,
        Json(AdminAuthResponse {
            message: "Admin created successfully".to_string(),
            token,
            admin,
        }),
    ))
}

/// POST /admin/login
///
/// Unknown email, non-admin role and wrong password all get the same
/// rejection so the response is not a membership oracle.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AdminAuthResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let admin = match repo.find_by_email(payload.email.trim()).await? {
        Some(u) if u.role == UserRole::Admin => u,
        _ => {
            warn!(email = %payload.email, "login_failed_unknown_admin");
            return Err(AppError::unauthorized("Invalid credentials"));
        }
    };

    let ok = password::verify_password(&payload.password, &admin.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify failed: {e}")))?;
    if !ok {
        warn!(admin_id = admin.id, "login_failed_bad_password");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    if !admin.is_active {
        warn!(admin_id = admin.id, "login_rejected_inactive");
        return Err(AppError::unauthorized("Account is deactivated"));
    }

    let token = state
        .jwt
        .issue(admin.id, &admin.email, UserRole::Admin.as_str())
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(AdminAuthResponse {
        message: "Login successful".to_string(),
        token,
        admin,
    }))
}
