#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use odata_menu_server::config::{DatabaseConfig, Settings};
use odata_menu_server::database::{DbPool, SqliteMenuItemRepository};
use odata_menu_server::{build_router, AppState};

pub const METADATA: &str = include_str!("../../config/metadata.xml");

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    // Keeps the metadata document alive for the duration of the test
    pub metadata_dir: TempDir,
}

pub fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_max_size: 1,
        pool_timeout_seconds: 3,
    }
}

pub async fn memory_pool() -> DbPool {
    let pool = DbPool::new(&memory_database()).await.unwrap();
    pool.init_schema().await.unwrap();
    pool
}

pub async fn spawn_app() -> TestApp {
    let metadata_dir = tempfile::tempdir().unwrap();
    let metadata_path = metadata_dir.path().join("metadata.xml");
    std::fs::write(&metadata_path, METADATA).unwrap();

    let mut settings = Settings::defaults().unwrap();
    settings.database = memory_database();
    settings.odata.metadata_path = metadata_path;

    let pool = memory_pool().await;
    let repository = Arc::new(SqliteMenuItemRepository::new(pool.clone()));
    let router = build_router(AppState::new(settings, repository));

    TestApp {
        router,
        pool,
        metadata_dir,
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .header("host", "localhost:52999")
            .body(Body::empty())
            .unwrap();
        let (status, body) = self.request(request).await;
        (status, parse(&body))
    }

    pub async fn post(&self, uri: &str, json: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("host", "localhost:52999")
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        let (status, body) = self.request(request).await;
        (status, parse(&body))
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = self.request(request).await;
        (status, parse(&body))
    }

    /// Creates an item and returns its assigned id.
    pub async fn create(&self, json: Value) -> i64 {
        let (status, body) = self.post("/odata/MenuItems", json).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["Id"].as_i64().unwrap()
    }
}

/// Empty bodies become `Value::Null`.
fn parse(body: &[u8]) -> Value {
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).unwrap()
    }
}
