//! Content CRUD through the HTTP surface: categories, top data, FAQs,
//! system prompt, home content and job postings, including the public
//! visibility rules after soft deletes.

mod common;

use http::StatusCode;
use serde_json::{Value, json};

use common::{json_request, send, setup, signup_admin};

async fn create_main_category(app: &axum::Router, token: &str, title: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/admin/categories/main",
            Some(token),
            Some(json!({ "title": title })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "main category create: {body}");
    body["id"].as_i64().unwrap()
}

async fn create_sub_category(app: &axum::Router, token: &str, main_id: i64, title: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/admin/categories/sub",
            Some(token),
            Some(json!({
                "main_category_id": main_id,
                "meta_title": title,
                "meta_description": "meta",
                "keywords": ["exam", "jobs"],
                "tags": ["2026"],
                "content_title": title,
                "content_description": "body"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "sub category create: {body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn main_category_crud_and_duplicate_title() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "cat@example.com").await;

    let id = create_main_category(&app, &token, "Engineering").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/categories/main",
            Some(&token),
            Some(json!({ "title": "Engineering" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Main category with this title already exists");

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/admin/categories/main/{id}"),
            Some(&token),
            Some(json!({ "title": "Engineering Exams" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Engineering Exams");

    // Public list only carries active categories.
    let (_, before) = send(&app, json_request("GET", "/category/main", None, None)).await;
    assert_eq!(before.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        json_request("GET", &format!("/category/main/{id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Engineering Exams");

    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/admin/categories/main/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, json_request("GET", "/category/main", None, None)).await;
    assert!(after.as_array().unwrap().is_empty());

    // By-id read hides the soft-deleted row too.
    let (status, _) = send(
        &app,
        json_request("GET", &format!("/category/main/{id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Admin list still shows the soft-deleted row.
    let (_, admin_list) = send(
        &app,
        json_request("GET", "/admin/categories/main", Some(&token), None),
    )
    .await;
    let rows = admin_list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["is_active"], false);
}

#[tokio::test]
async fn sub_category_requires_existing_parent_and_joins_its_title() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "sub@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/categories/sub",
            Some(&token),
            Some(json!({
                "main_category_id": 9999,
                "meta_title": "Orphan",
                "content_title": "Orphan"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Main category not found");

    let main_id = create_main_category(&app, &token, "Banking").await;
    let sub_id = create_sub_category(&app, &token, main_id, "IBPS Clerk").await;

    let (status, body) = send(
        &app,
        json_request("GET", &format!("/category/sub/{sub_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["main_category_title"], "Banking");
    assert_eq!(body["keywords"], json!(["exam", "jobs"]));

    // Listing scoped to the parent.
    let (status, body) = send(
        &app,
        json_request("GET", &format!("/category/sub/main/{main_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn sub_category_search_matches_titles_and_falls_back_when_empty() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "search@example.com").await;

    let main_id = create_main_category(&app, &token, "Railways").await;
    create_sub_category(&app, &token, main_id, "RRB NTPC").await;
    create_sub_category(&app, &token, main_id, "RRB Group D").await;

    let (status, body) = send(
        &app,
        json_request("GET", "/category/sub/search?search=NTPC", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Empty term behaves like a plain active listing.
    let (status, body) = send(
        &app,
        json_request("GET", "/category/sub/search?search=", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // LIKE wildcards are escaped, not interpreted.
    let (status, body) = send(
        &app,
        json_request("GET", "/category/sub/search?search=%25", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn top_data_defaults_color_and_requires_parent() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "top@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/topdata",
            Some(&token),
            Some(json!({ "sub_category_id": 12345, "title": "Nowhere" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Sub category not found");

    let main_id = create_main_category(&app, &token, "Defence").await;
    let sub_id = create_sub_category(&app, &token, main_id, "NDA").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/topdata",
            Some(&token),
            Some(json!({ "sub_category_id": sub_id, "title": "Cut-off out" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["color_code"], "#000000");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/topdata",
            Some(&token),
            Some(json!({
                "sub_category_id": sub_id,
                "title": "Result declared",
                "color_code": "#ff0000"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["color_code"], "#ff0000");

    let (_, listing) = send(&app, json_request("GET", "/category/topdata", None, None)).await;
    assert_eq!(listing.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn faqs_are_served_in_sort_order() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "faq@example.com").await;

    let main_id = create_main_category(&app, &token, "SSC").await;
    let sub_id = create_sub_category(&app, &token, main_id, "SSC CGL").await;

    for (question, sort_order) in [("Second", 2), ("First", 1), ("Third", 3)] {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/admin/faqs",
                Some(&token),
                Some(json!({
                    "sub_category_id": sub_id,
                    "question": question,
                    "answer": "Because.",
                    "sort_order": sort_order
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        json_request("GET", &format!("/category/faqs/subcategory/{sub_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, ["First", "Second", "Third"]);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/faqs",
            Some(&token),
            Some(json!({ "sub_category_id": sub_id, "question": " ", "answer": "x" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Question and answer are required");
}

#[tokio::test]
async fn system_prompt_is_a_singleton() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "prompt@example.com").await;

    let (status, body) = send(
        &app,
        json_request("GET", "/admin/system-prompt", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");

    // The ungated read answers the same before a prompt exists.
    let (status, _) = send(&app, json_request("GET", "/system-prompt/public", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/system-prompt",
            Some(&token),
            Some(json!({ "prompt": "You are a helpful exam assistant.", "description": "v1" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let first_id = body["id"].as_i64().unwrap();

    // Anyone may read the active prompt; no token needed.
    let (status, body) = send(&app, json_request("GET", "/system-prompt/public", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompt"], "You are a helpful exam assistant.");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/admin/system-prompt",
            Some(&token),
            Some(json!({ "prompt": "Second prompt" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "An active system prompt already exists");

    // Retiring the active prompt opens the slot again.
    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/admin/system-prompt/{first_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/admin/system-prompt",
            Some(&token),
            Some(json!({ "prompt": "Second prompt" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn home_content_validation_pagination_and_hard_delete() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "home@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/home-content/admin",
            Some(&token),
            Some(json!({
                "title": "Welcome",
                "description": "",
                "telegram_link": "https://t.me/portal",
                "whatsapp_link": "https://wa.me/1"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/home-content/admin",
            Some(&token),
            Some(json!({
                "title": "Welcome",
                "description": "desc",
                "telegram_link": "https://t.me/portal",
                "whatsapp_link": "https://wa.me/1",
                "faqs": [{ "question": "Q?", "answer": "" }]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Each FAQ requires a question and an answer");

    let mut first_id = 0;
    for i in 1..=3 {
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/home-content/admin",
                Some(&token),
                Some(json!({
                    "title": format!("Block {i}"),
                    "description": "desc",
                    "telegram_link": "https://t.me/portal",
                    "whatsapp_link": "https://wa.me/1",
                    "faqs": [{ "question": "How?", "answer": "Like this." }]
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        if i == 1 {
            first_id = body["id"].as_i64().unwrap();
        }
    }

    let (status, body) = send(
        &app,
        json_request("GET", "/home-content/public/all?page=1&limit=2", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["totalItems"], 3);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["currentPage"], 1);

    let (status, body) = send(&app, json_request("GET", "/home-content/public/active", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["title"].as_str().unwrap().starts_with("Block"));
    assert_eq!(body["faqs"][0]["question"], "How?");

    // Hard delete: the row is gone, not hidden.
    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/home-content/admin/{first_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request("GET", &format!("/home-content/admin/{first_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, json_request("GET", "/home-content/public/all", None, None)).await;
    assert_eq!(body["pagination"]["totalItems"], 2);
}

async fn create_job(app: &axum::Router, token: &str, category: &str, title: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/latest-jobs/admin",
            Some(token),
            Some(json!({
                "category": category,
                "meta_title": title,
                "meta_tags": ["govt"],
                "keywords": ["2026"],
                "content_title": title,
                "content_description": "Apply online before the deadline."
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "job create: {body}");
    body
}

#[tokio::test]
async fn job_postings_reject_unknown_categories() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "jobs@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/latest-jobs/admin",
            Some(&token),
            Some(json!({
                "category": "Jobs",
                "meta_title": "t",
                "content_title": "t",
                "content_description": "d"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"].as_str().unwrap().starts_with("Invalid category. Allowed:"),
        "{body}"
    );

    // The filter parameter goes through the same parser.
    let (status, _) = send(
        &app,
        json_request("GET", "/latest-jobs/public?category=jobs", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request("GET", "/latest-jobs/public/category/NoSuch", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn job_listing_filters_by_category_search_and_visibility() {
    let (_state, app) = setup().await;
    let (token, _) = signup_admin(&app, "listing@example.com").await;

    let result = create_job(&app, &token, "Results", "SSC CGL Result 2026").await;
    create_job(&app, &token, "AdmitCards", "RRB NTPC Admit Card").await;
    create_job(&app, &token, "Results", "IBPS PO Result").await;

    let (status, body) = send(
        &app,
        json_request("GET", "/latest-jobs/public/category/Results", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 2);

    let (status, body) = send(
        &app,
        json_request("GET", "/latest-jobs/public?search=Admit", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 1);
    assert_eq!(body["data"][0]["category"], "AdmitCards");

    // Soft delete hides the row from the public but not from admins.
    let result_id = result["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        json_request("DELETE", &format!("/latest-jobs/admin/{result_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request("GET", &format!("/latest-jobs/public/{result_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, public) = send(&app, json_request("GET", "/latest-jobs/public", None, None)).await;
    assert_eq!(public["pagination"]["totalItems"], 2);

    let (_, admin) = send(&app, json_request("GET", "/latest-jobs/admin", Some(&token), None)).await;
    assert_eq!(admin["pagination"]["totalItems"], 3);
}

#[tokio::test]
async fn employee_can_edit_but_not_create_content() {
    let (_state, app) = setup().await;
    let (admin_token, _) = signup_admin(&app, "mgr@example.com").await;
    let (emp_token, _) =
        common::create_and_login_employee(&app, &admin_token, "editor3").await;

    let main_id = create_main_category(&app, &admin_token, "UPSC").await;
    let sub_id = create_sub_category(&app, &admin_token, main_id, "Civil Services").await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/employee/categories/sub/{sub_id}"),
            Some(&emp_token),
            Some(json!({ "content_description": "Updated by an editor" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["content_description"], "Updated by an editor");

    // FAQs scoped to a sub category are readable in display order.
    for (question, sort_order) in [("Later", 5), ("Sooner", 1)] {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/admin/faqs",
                Some(&admin_token),
                Some(json!({
                    "sub_category_id": sub_id,
                    "question": question,
                    "answer": "See the notification.",
                    "sort_order": sort_order
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        json_request(
            "GET",
            &format!("/employee/faqs/subcategory/{sub_id}"),
            Some(&emp_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, ["Sooner", "Later"]);

    // No create route exists on the employee surface.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/employee/categories/sub",
            Some(&emp_token),
            Some(json!({
                "main_category_id": main_id,
                "meta_title": "x",
                "content_title": "x"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
