//! Authentication and authorization gate behavior, end to end.
//!
//! Every protected surface must answer 401 only for a missing or
//! malformed Authorization header; any token failure or role miss is a
//! 403 with the matching message.

mod common;

use http::StatusCode;
use serde_json::json;

use portal_server::auth::JwtService;
use portal_server::db::repository::{EmployeeRepository, UserRepository};
use shared::models::EmployeeUpdate;

use common::{create_and_login_employee, json_request, send, setup, signup_admin, TEST_SECRET};

#[tokio::test]
async fn missing_header_is_401_on_every_gate() {
    let (_state, app) = setup().await;

    // Two-step admin gate, one-step admin gate, employee gate.
    for uri in [
        "/admin/employees",
        "/home-content/admin",
        "/employee/categories/sub",
    ] {
        let (status, body) = send(&app, json_request("GET", uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri {uri}");
        assert_eq!(body["message"], "Access token required", "uri {uri}");
    }
}

#[tokio::test]
async fn malformed_header_is_401() {
    let (_state, app) = setup().await;

    let request = http::Request::builder()
        .method("GET")
        .uri("/admin/employees")
        .header(http::header::AUTHORIZATION, "Token abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Access token required");
}

#[tokio::test]
async fn forged_token_is_403_under_both_gate_styles() {
    let (_state, app) = setup().await;

    let forged = JwtService::new("some-other-secret", 24)
        .issue(1, "admin@example.com", "admin")
        .unwrap();

    // Two-step gate on /admin, one-step gates on the content routers.
    for uri in [
        "/admin/employees",
        "/home-content/admin",
        "/latest-jobs/admin",
        "/employee/categories/sub",
    ] {
        let (status, body) = send(&app, json_request("GET", uri, Some(&forged), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "uri {uri}");
        assert_eq!(body["message"], "Invalid token", "uri {uri}");
    }
}

#[tokio::test]
async fn expired_token_is_403() {
    let (_state, app) = setup().await;
    let (_, admin_id) = signup_admin(&app, "expired@example.com").await;

    // Same secret as the app, but already past its expiry.
    let expired = JwtService::new(TEST_SECRET, -1)
        .issue(admin_id, "expired@example.com", "admin")
        .unwrap();

    let (status, body) = send(&app, json_request("GET", "/admin/employees", Some(&expired), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn deactivated_admin_loses_access_with_a_live_token() {
    let (state, app) = setup().await;
    let (token, admin_id) = signup_admin(&app, "boss@example.com").await;

    // Token works while the account is active.
    let (status, _) = send(&app, json_request("GET", "/admin/employees", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    UserRepository::new(state.pool.clone())
        .set_active(admin_id, false)
        .await
        .unwrap();

    let (status, body) = send(&app, json_request("GET", "/admin/employees", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin access required");
}

#[tokio::test]
async fn deactivated_employee_keeps_access_until_token_expiry() {
    let (state, app) = setup().await;
    let (admin_token, _) = signup_admin(&app, "hr@example.com").await;
    let (emp_token, emp_id) = create_and_login_employee(&app, &admin_token, "editor1").await;

    let (status, _) = send(
        &app,
        json_request("GET", "/employee/categories/sub", Some(&emp_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The employee gate checks existence only; deactivation does not cut
    // off outstanding tokens.
    EmployeeRepository::new(state.pool.clone())
        .update(
            emp_id,
            &EmployeeUpdate {
                name: None,
                email: None,
                password: None,
                is_active: Some(false),
            },
            None,
        )
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        json_request("GET", "/employee/categories/sub", Some(&emp_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn employee_token_is_rejected_on_admin_routes() {
    let (_state, app) = setup().await;
    let (admin_token, _) = signup_admin(&app, "lead@example.com").await;
    let (emp_token, _) = create_and_login_employee(&app, &admin_token, "editor2").await;

    // Two-step gate: the token is valid but no matching admin exists.
    let (status, body) = send(&app, json_request("GET", "/admin/employees", Some(&emp_token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin access required");

    // One-step gate behaves the same.
    let (status, body) = send(&app, json_request("GET", "/home-content/admin", Some(&emp_token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin access required");
}

#[tokio::test]
async fn admin_token_is_rejected_on_employee_routes() {
    let (_state, app) = setup().await;
    let (admin_token, _) = signup_admin(&app, "solo@example.com").await;

    let (status, body) = send(
        &app,
        json_request("GET", "/employee/categories/sub", Some(&admin_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Employee access required");
}

#[tokio::test]
async fn admin_login_rejects_bad_credentials_uniformly() {
    let (_state, app) = setup().await;
    signup_admin(&app, "owner@example.com").await;

    // Unknown email and wrong password produce the same answer.
    for (email, password) in [
        ("nobody@example.com", "password123"),
        ("owner@example.com", "wrong-password"),
    ] {
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/admin/login",
                None,
                Some(json!({ "email": email, "password": password })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn deactivated_admin_cannot_log_in() {
    let (state, app) = setup().await;
    let (_, admin_id) = signup_admin(&app, "gone@example.com").await;

    UserRepository::new(state.pool.clone())
        .set_active(admin_id, false)
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/login",
            None,
            Some(json!({ "email": "gone@example.com", "password": "password123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Account is deactivated");
}

#[tokio::test]
async fn signup_requires_all_fields_and_unique_email() {
    let (_state, app) = setup().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/signup",
            None,
            Some(json!({ "name": "", "email": "a@example.com", "password": "pw" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    signup_admin(&app, "dup@example.com").await;
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/admin/signup",
            None,
            Some(json!({ "name": "Again", "email": "dup@example.com", "password": "password123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn full_admin_flow_signup_login_and_protected_access() {
    let (_state, app) = setup().await;
    signup_admin(&app, "flow@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/login",
            None,
            Some(json!({ "email": "flow@example.com", "password": "password123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["admin"].get("password_hash").is_none());

    let token = body["token"].as_str().unwrap();
    let (status, employees) = send(&app, json_request("GET", "/admin/employees", Some(token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(employees.as_array().unwrap().is_empty());
}
