//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use hookhub_api::{AppState, build_app};
use hookhub_catalog::{CatalogSource, HookCatalog};
use hookhub_core::config::AppConfig;

/// Dataset shared by the integration tests.
pub const FIXTURE: &str = "tests/fixtures/hooks.json";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The catalog the router serves
    pub catalog: HookCatalog,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application serving the fixture dataset
    pub async fn new() -> Self {
        Self::with_dataset(FIXTURE).await
    }

    /// Create a test application serving `path`
    pub async fn with_dataset(path: &str) -> Self {
        let catalog = load_fixture(path)
            .await
            .expect("Failed to load fixture dataset");
        let config = AppConfig::default();
        let router = build_app(AppState::new(config.clone(), catalog.clone()));

        Self {
            router,
            catalog,
            config,
        }
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            text,
            body,
        }
    }
}

/// Load a dataset from the fixtures directory
pub async fn load_fixture(path: &str) -> hookhub_core::AppResult<HookCatalog> {
    HookCatalog::load(&CatalogSource::File(PathBuf::from(path))).await
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header value
    pub content_type: String,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body (`Null` for non-JSON responses)
    pub body: Value,
}
