//! Employee management (admin)

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use shared::models::{Employee, EmployeeCreate};

use crate::auth::CurrentUser;
use crate::auth::password;
use crate::common::{AppError, AppResult};
use crate::db::repository::EmployeeRepository;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/employees", get(list).post(create))
}

/// POST /admin/employees
async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.login_id.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::bad_request("All fields are required"));
    }

    let hash = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hash failed: {e}")))?;

    let repo = EmployeeRepository::new(state.pool.clone());
    let employee = repo.create(&payload, &hash, user.id).await?;

    tracing::info!(
        employee_id = employee.id,
        created_by = user.id,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /admin/employees - active employees
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.pool.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}
