mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, send, send_raw};
use serde_json::json;

#[tokio::test]
async fn given_running_service_when_pinged_then_answers_pong() {
    let app = create_test_app().await;

    let (status, body) = send_raw(&app, Method::GET, "/ping", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn given_name_when_project_created_then_returns_201_with_record() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({ "name": "Writing" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Writing");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn given_new_project_when_listing_then_it_is_first_and_assignable() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/api/projects", Some(json!({ "name": "old" })))
        .await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({ "name": "new" })),
    )
    .await;

    let (status, projects) =
        send(&app, Method::GET, "/api/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(projects[0]["id"], created["id"]);
    assert_eq!(projects[1]["name"], "old");

    let (status, prompt) = send(
        &app,
        Method::POST,
        "/api/prompts",
        Some(json!({
            "title": "t",
            "content": "c",
            "tags": [],
            "projectId": created["id"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(prompt["projectId"], created["id"]);
}

#[tokio::test]
async fn given_missing_name_when_project_created_then_empty_name_is_stored() {
    let app = create_test_app().await;

    let (status, body) =
        send(&app, Method::POST, "/api/projects", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}

#[tokio::test]
async fn given_unknown_route_when_requested_then_returns_json_404() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}
