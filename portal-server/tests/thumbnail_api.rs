//! Thumbnail upload lifecycle: multipart create, validation, the public
//! projection and file cleanup on delete.

mod common;

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;

use common::{json_request, send, setup_with_config, signup_admin, test_config};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Hand-built multipart body with the usual text fields and one file part.
fn multipart_body(title: &str, file_name: Option<&str>, file_bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\nA banner\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"url\"\r\n\r\nhttps://example.com/target\r\n"
        )
        .as_bytes(),
    );

    if let Some(name) = file_name {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(file_bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, method: &str, token: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn upload(app: &axum::Router, token: &str, title: &str, file_name: &str) -> Value {
    let body = multipart_body(title, Some(file_name), b"fake image bytes");
    let (status, json) = send(app, multipart_request("/thumbnails/admin", "POST", token, body)).await;
    assert_eq!(status, StatusCode::CREATED, "upload: {json}");
    json
}

#[tokio::test]
async fn upload_stores_the_file_and_serves_a_public_projection() {
    let dir = tempfile::tempdir().unwrap();
    let (_state, app) = setup_with_config(test_config(dir.path().to_str().unwrap())).await;
    let (token, _) = signup_admin(&app, "thumbs@example.com").await;

    let thumb = upload(&app, &token, "Hero banner", "banner.png").await;
    let image_url = thumb["image_url"].as_str().unwrap();
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".png"));
    assert_eq!(thumb["original_file_name"], "banner.png");
    assert_eq!(thumb["mime_type"], "image/png");
    assert_eq!(thumb["file_size"], 16);

    let stored = dir.path().join(image_url.strip_prefix("/uploads/").unwrap());
    assert_eq!(std::fs::read(&stored).unwrap(), b"fake image bytes");

    // Public projection hides the bookkeeping columns.
    let (status, body) = send(&app, json_request("GET", "/thumbnails", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Hero banner");
    assert!(rows[0].get("original_file_name").is_none());
    assert!(rows[0].get("created_by").is_none());
}

#[tokio::test]
async fn upload_rejects_missing_title_missing_file_and_bad_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let (_state, app) = setup_with_config(test_config(dir.path().to_str().unwrap())).await;
    let (token, _) = signup_admin(&app, "reject@example.com").await;

    let body = multipart_body("", Some("banner.png"), b"data");
    let (status, json) = send(&app, multipart_request("/thumbnails/admin", "POST", &token, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Title is required");

    let body = multipart_body("No file", None, b"");
    let (status, json) = send(&app, multipart_request("/thumbnails/admin", "POST", &token, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Image file is required");

    let body = multipart_body("Script", Some("evil.exe"), b"MZ");
    let (status, json) = send(&app, multipart_request("/thumbnails/admin", "POST", &token, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"].as_str().unwrap().contains("Only image files are allowed"),
        "{json}"
    );

    let body = multipart_body("Empty", Some("empty.png"), b"");
    let (status, json) = send(&app, multipart_request("/thumbnails/admin", "POST", &token, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Empty file provided");
}

#[tokio::test]
async fn replacing_the_image_removes_the_old_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_state, app) = setup_with_config(test_config(dir.path().to_str().unwrap())).await;
    let (token, _) = signup_admin(&app, "replace@example.com").await;

    let thumb = upload(&app, &token, "Old", "old.png").await;
    let id = thumb["id"].as_i64().unwrap();
    let old_path = dir.path().join(
        thumb["image_url"].as_str().unwrap().strip_prefix("/uploads/").unwrap(),
    );
    assert!(old_path.exists());

    let body = multipart_body("New title", Some("new.webp"), b"fresh bytes");
    let (status, updated) = send(
        &app,
        multipart_request(&format!("/thumbnails/admin/{id}"), "PUT", &token, body),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["mime_type"], "image/webp");
    assert!(!old_path.exists());

    let new_path = dir.path().join(
        updated["image_url"].as_str().unwrap().strip_prefix("/uploads/").unwrap(),
    );
    assert!(new_path.exists());
}

#[tokio::test]
async fn delete_soft_deletes_the_row_and_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_state, app) = setup_with_config(test_config(dir.path().to_str().unwrap())).await;
    let (token, _) = signup_admin(&app, "cleanup@example.com").await;

    let thumb = upload(&app, &token, "Short lived", "gone.jpg").await;
    let id = thumb["id"].as_i64().unwrap();
    let path = dir.path().join(
        thumb["image_url"].as_str().unwrap().strip_prefix("/uploads/").unwrap(),
    );

    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/thumbnails/admin/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!path.exists());

    // Hidden from the public, still visible to admins.
    let (status, _) = send(&app, json_request("GET", &format!("/thumbnails/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        json_request("GET", &format!("/thumbnails/admin/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], false);
}
