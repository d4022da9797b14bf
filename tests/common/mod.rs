//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use portal_api::{AppState, build_app};
use portal_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, SeedConfig, ServerConfig, StoreProvider,
};
use portal_database::MemoryUserStore;
use portal_service::Seeder;

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

/// Router backed by a fresh in-memory store holding the three seed accounts.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryUserStore>,
    pub config: AppConfig,
}

/// Status plus parsed JSON body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            provider: StoreProvider::Memory,
            ..DatabaseConfig::default()
        },
        auth: AuthConfig::new(ACCESS_SECRET, REFRESH_SECRET),
        logging: LoggingConfig::default(),
        seed: SeedConfig {
            enabled: true,
            ..SeedConfig::default()
        },
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryUserStore::new());

        Seeder::new(store.clone())
            .run(&config.seed)
            .await
            .expect("seeding failed");

        let state = AppState::new(config.clone(), store.clone());
        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        let req = req.body(Body::from(body)).expect("build request");

        let response = self.router.clone().oneshot(req).await.expect("send request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Log in and return `(accessToken, refreshToken)`.
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);

        let data = &response.body["data"];
        (
            data["accessToken"].as_str().expect("accessToken").to_string(),
            data["refreshToken"].as_str().expect("refreshToken").to_string(),
        )
    }

    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin123").await.0
    }

    /// Create a user through the API as admin and return its id.
    pub async fn create_user(&self, token: &str, username: &str, role: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/users",
                Some(serde_json::json!({
                    "username": username,
                    "password": "password123",
                    "role": role,
                })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create failed: {:?}",
            response.body
        );
        response.body["data"]["id"].as_i64().expect("user id")
    }
}
