//! Authorization gates
//!
//! Two usage patterns over the same four checks:
//!
//! - Two-step: `authenticate` validates the bearer token and injects
//!   [`CurrentUser`], then `require_admin` / `require_employee` resolve the
//!   principal against the store.
//! - One-step: `authenticate_admin` / `authenticate_employee` do both in a
//!   single middleware, short-circuiting at the first failure.
//!
//! Status contract: a missing or malformed Authorization header is the only
//! 401. Invalid and expired tokens both get 403 "Invalid token" so the
//! response does not distinguish expiry from tampering. Role/lookup misses
//! are 403; a store failure is an opaque 500.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::common::AppError;
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::state::AppState;

use super::{CurrentUser, JwtService};

const TOKEN_REQUIRED: &str = "Access token required";
const INVALID_TOKEN: &str = "Invalid token";
const ADMIN_REQUIRED: &str = "Admin access required";
const EMPLOYEE_REQUIRED: &str = "Employee access required";

/// Token checks shared by every gate: header presence, Bearer shape,
/// signature and expiry.
fn check_token(state: &AppState, req: &Request) -> Result<CurrentUser, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let header = match auth_header {
        Some(h) => h,
        None => {
            warn!(uri = %req.uri(), "auth_missing");
            return Err(AppError::unauthorized(TOKEN_REQUIRED));
        }
    };

    let token = match JwtService::extract_from_header(header) {
        Some(t) => t,
        None => {
            warn!(uri = %req.uri(), "auth_malformed_header");
            return Err(AppError::unauthorized(TOKEN_REQUIRED));
        }
    };

    match state.jwt.verify(token) {
        Ok(claims) => Ok(CurrentUser::from(claims)),
        Err(e) => {
            warn!(uri = %req.uri(), error = %e, "auth_failed");
            Err(AppError::forbidden(INVALID_TOKEN))
        }
    }
}

/// Admin resolution: the decoded principal must exist in `users`, be
/// active, and hold the admin role. The role claim in the token is not
/// trusted on its own.
async fn resolve_admin(state: &AppState, user: &CurrentUser) -> Result<(), AppError> {
    let repo = UserRepository::new(state.pool.clone());
    let record = repo
        .find_by_id(user.id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    match record {
        Some(u) if u.is_active && u.role == shared::models::UserRole::Admin => Ok(()),
        Some(u) => {
            warn!(
                user_id = user.id,
                is_active = u.is_active,
                role = %u.role.as_str(),
                "admin_required"
            );
            Err(AppError::forbidden(ADMIN_REQUIRED))
        }
        None => {
            warn!(user_id = user.id, "admin_required_unknown_principal");
            Err(AppError::forbidden(ADMIN_REQUIRED))
        }
    }
}

/// Employee resolution: existence in `employees` suffices. The active flag
/// is deliberately not checked here; deactivation only blocks the next
/// login, not outstanding tokens.
async fn resolve_employee(state: &AppState, user: &CurrentUser) -> Result<(), AppError> {
    let repo = EmployeeRepository::new(state.pool.clone());
    let record = repo
        .find_by_id(user.id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    match record {
        Some(_) => Ok(()),
        None => {
            warn!(user_id = user.id, "employee_required_unknown_principal");
            Err(AppError::forbidden(EMPLOYEE_REQUIRED))
        }
    }
}

/// Two-step gate, step one: validate the token and inject [`CurrentUser`].
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = check_token(&state, &req)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Two-step gate, step two: admin resolution against the store.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized(TOKEN_REQUIRED))?;

    resolve_admin(&state, &user).await?;
    Ok(next.run(req).await)
}

/// Two-step gate, step two: employee resolution against the store.
pub async fn require_employee(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized(TOKEN_REQUIRED))?;

    resolve_employee(&state, &user).await?;
    Ok(next.run(req).await)
}

/// One-step admin gate.
pub async fn authenticate_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = check_token(&state, &req)?;
    resolve_admin(&state, &user).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// One-step employee gate.
pub async fn authenticate_employee(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = check_token(&state, &req)?;
    resolve_employee(&state, &user).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
