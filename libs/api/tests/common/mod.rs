#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use repository::{DatabaseConfig, Repository};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub async fn create_test_repository() -> Repository {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
    };

    Repository::new("sqlite::memory:", &config).await.unwrap()
}

/// File-backed store with a second raw connection for planting rows the API
/// would never write. Keep the `TempDir` alive for the whole test.
pub async fn create_file_repository(
) -> (Repository, DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let repository = Repository::new(&url, &DatabaseConfig::default())
        .await
        .unwrap();
    let raw = Database::connect(&url).await.unwrap();

    (repository, raw, dir)
}

pub async fn insert_raw_prompt(raw: &DatabaseConnection, tags: &str) {
    raw.execute_unprepared(&format!(
        "INSERT INTO prompt (title, content, tags, project_id, created_at) \
         VALUES ('raw', 'raw', '{}', NULL, '2026-01-01 00:00:00')",
        tags
    ))
    .await
    .unwrap();
}

pub async fn create_test_app() -> Router {
    api::router(create_test_repository().await)
}

/// Sends one request through the router and returns the status with the raw
/// body text.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, method, uri, body).await;

    (status, serde_json::from_str(&text).unwrap())
}
