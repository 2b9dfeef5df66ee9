//! Auth DTOs

use serde::{Deserialize, Serialize};

use super::{Employee, User};

/// Admin login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Employee login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeLoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Admin signup/login response (token + account, hash omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthResponse {
    pub message: String,
    pub token: String,
    pub admin: User,
}

/// Employee login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAuthResponse {
    pub message: String,
    pub token: String,
    pub employee: Employee,
}
