//! HTTP tests for admin user management.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn non_admin_roles_are_forbidden() {
    let app = TestApp::new().await;

    for (username, password) in [("teacher001", "teacher123"), ("student001", "student123")] {
        let (token, _) = app.login(username, password).await;
        let response = app.request("GET", "/api/v1/users", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["success"], false);
        assert_eq!(
            response.message(),
            "You do not have permission to access this resource"
        );
    }
}

#[tokio::test]
async fn anonymous_listing_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/v1/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn second_page_of_twenty_five_students() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    for i in 0..24 {
        app.create_user(&token, &format!("pupil{i:02}"), "student").await;
    }

    // 24 created plus the seeded student001.
    let response = app
        .request(
            "GET",
            "/api/v1/users?page=2&limit=10&role=student",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Users retrieved successfully");
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);
    assert_eq!(response.body["meta"]["page"], 2);
    assert_eq!(response.body["meta"]["limit"], 10);
    assert_eq!(response.body["meta"]["total"], 25);
    assert_eq!(response.body["meta"]["totalPages"], 3);
}

#[tokio::test]
async fn listing_is_newest_first_with_defaults() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_user(&token, "latest01", "staff").await;

    let response = app
        .request("GET", "/api/v1/users?page=0&limit=-3", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["page"], 1);
    assert_eq!(response.body["meta"]["limit"], 10);
    assert_eq!(response.body["data"][0]["username"], "latest01");
}

#[tokio::test]
async fn search_and_active_filters_combine() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_user(&token, "teacher002", "teacher").await;
    let disabled = app.create_user(&token, "teacher003", "teacher").await;
    app.request(
        "PUT",
        &format!("/api/v1/users/{disabled}"),
        Some(json!({ "is_active": false })),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "GET",
            "/api/v1/users?search=teacher&is_active=true",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 2);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"teacher003"));
}

#[tokio::test]
async fn invalid_role_filter_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/v1/users?role=principal", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_then_fetch_by_id() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_user(&token, "staff001", "staff").await;

    let response = app
        .request("GET", &format!("/api/v1/users/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["username"], "staff001");
    assert_eq!(data["role"], "staff");
    assert_eq!(data["is_active"], true);
    assert!(data.get("password_hash").is_none());

    app.login("staff001", "password123").await;
}

#[tokio::test]
async fn duplicate_username_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({ "username": "teacher001", "password": "password123", "role": "teacher" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "username already exists");
}

#[tokio::test]
async fn create_validates_body() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let cases = [
        json!({ "username": "ab", "password": "password123", "role": "staff" }),
        json!({ "username": "staff009", "password": "12345", "role": "staff" }),
        json!({ "username": "staff009", "password": "password123", "role": "janitor" }),
        json!({ "username": "staff009" }),
    ];
    for body in cases {
        let response = app
            .request("POST", "/api/v1/users", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.body["success"], false);
    }
}

#[tokio::test]
async fn partial_update_leaves_other_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_user(&token, "teacher010", "teacher").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            Some(json!({ "is_active": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User updated successfully");
    assert_eq!(response.body["data"]["role"], "teacher");
    assert_eq!(response.body["data"]["is_active"], false);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            Some(json!({ "role": "staff" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"]["role"], "staff");
    assert_eq!(response.body["data"]["is_active"], false);
}

#[tokio::test]
async fn delete_then_lookup_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_user(&token, "student777", "student").await;

    let response = app
        .request("DELETE", &format!("/api/v1/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User deleted successfully");

    for method in ["GET", "DELETE"] {
        let response = app
            .request(method, &format!("/api/v1/users/{id}"), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message(), "user not found");
    }

    let response = app
        .request(
            "PUT",
            "/api/v1/users/9999",
            Some(json!({ "role": "staff" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for path in ["/api/v1/users/abc", "/api/v1/users/0"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message(), "Invalid user ID");
    }
}

#[tokio::test]
async fn huge_limit_returns_a_single_page() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "GET",
            "/api/v1/users?limit=9223372036854775807",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total"], 3);
    assert_eq!(response.body["meta"]["totalPages"], 1);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn non_admin_is_forbidden_before_input_is_parsed() {
    let app = TestApp::new().await;
    let (token, _) = app.login("teacher001", "teacher123").await;

    let invalid_body = json!({ "username": "ab", "password": "1", "role": "x" });
    let cases = [
        ("POST", "/api/v1/users", Some(invalid_body.clone())),
        ("POST", "/api/v1/users", Some(json!({}))),
        ("GET", "/api/v1/users/abc", None),
        ("GET", "/api/v1/users?page=abc", None),
        ("PUT", "/api/v1/users/abc", Some(json!({ "role": 7 }))),
        ("DELETE", "/api/v1/users/0", None),
    ];
    for (method, path, body) in cases {
        let response = app.request(method, path, body, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(
            response.message(),
            "You do not have permission to access this resource"
        );
    }
}

#[tokio::test]
async fn password_length_follows_configuration() {
    let mut config = common::test_config();
    config.auth.password_min_length = 10;
    let app = TestApp::with_config(config).await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({ "username": "staff100", "password": "short-pw1", "role": "staff" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Password must be at least 10 characters long");

    app.create_user(&token, "staff101", "staff").await;
}
