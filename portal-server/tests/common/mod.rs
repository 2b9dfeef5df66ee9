//! Shared helpers for integration tests: an app over an in-memory
//! database, plus small request/response utilities.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portal_server::api;
use portal_server::config::Config;
use portal_server::db::DbService;
use portal_server::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config(upload_dir: &str) -> Config {
    Config {
        http_port: 0,
        database_path: ":memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiry_hours: 24,
        upload_dir: upload_dir.to_string(),
    }
}

/// App over a fresh in-memory database.
pub async fn setup() -> (AppState, Router) {
    setup_with_config(test_config("uploads-test")).await
}

pub async fn setup_with_config(config: Config) -> (AppState, Router) {
    let db = DbService::new_in_memory().await.expect("in-memory db");
    let state = AppState::with_pool(config, db.pool).expect("state");
    let app = api::build_app(state.clone());
    (state, app)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Create an admin account and return (token, admin id).
pub async fn signup_admin(app: &Router, email: &str) -> (String, i64) {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/admin/signup",
            None,
            Some(serde_json::json!({
                "name": "Root Admin",
                "email": email,
                "password": "password123"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();
    let id = body["admin"]["id"].as_i64().expect("admin id");
    (token, id)
}

/// Create an employee (as admin) and log in as them.
/// Returns (employee token, employee id).
pub async fn create_and_login_employee(
    app: &Router,
    admin_token: &str,
    login_id: &str,
) -> (String, i64) {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/admin/employees",
            Some(admin_token),
            Some(serde_json::json!({
                "name": "Editor",
                "email": format!("{login_id}@example.com"),
                "login_id": login_id,
                "password": "emp-password"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "employee create failed: {body}");
    let id = body["id"].as_i64().expect("employee id");

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/employee/login",
            None,
            Some(serde_json::json!({
                "login_id": login_id,
                "password": "emp-password"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "employee login failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();
    (token, id)
}
