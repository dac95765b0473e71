// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{setup_db, test_settings};
use axum::http::StatusCode;
use axum_test::TestServer;
use example_api::infrastructure::repositories::example_repo_impl::ExampleRepositoryImpl;
use example_api::infrastructure::repositories::in_memory_example_repo::InMemoryExampleRepository;
use example_api::presentation::handlers::health_handler::DatabaseProbe;
use example_api::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;

fn in_memory_server() -> TestServer {
    let app = routes::app(
        &test_settings(),
        Arc::new(InMemoryExampleRepository::new()),
        DatabaseProbe::default(),
    );
    TestServer::new(app).unwrap()
}

async fn database_server() -> TestServer {
    let db = setup_db().await;
    let app = routes::app(
        &test_settings(),
        Arc::new(ExampleRepositoryImpl::new(db.clone())),
        DatabaseProbe(Some(db)),
    );
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_example() {
    let server = in_memory_server();

    let response = server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Test Example", "description": "Test Description" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let data: Value = response.json();
    assert_eq!(data["id"], 1);
    assert_eq!(data["name"], "Test Example");
    assert_eq!(data["description"], "Test Description");
    assert_eq!(data["created_at"], data["updated_at"]);
}

#[tokio::test]
async fn test_get_example() {
    let server = database_server().await;

    let created: Value = server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Test Example" }))
        .await
        .json();
    let example_id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/v1/examples/{}", example_id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data: Value = response.json();
    assert_eq!(data["name"], "Test Example");
    assert!(data["description"].is_null());
    assert_eq!(data, created);
}

#[tokio::test]
async fn test_get_missing_example_returns_404() {
    let server = in_memory_server();
    server
        .post("/api/v1/examples")
        .json(&json!({ "name": "only" }))
        .await;

    let response = server.get("/api/v1/examples/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let data: Value = response.json();
    assert_eq!(data["error"], "Example not found");
}

#[tokio::test]
async fn test_list_examples() {
    let server = database_server().await;

    let empty: Value = server.get("/api/v1/examples").await.json();
    assert_eq!(empty, json!([]));

    server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Example 1" }))
        .await;
    server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Example 2" }))
        .await;

    let response = server.get("/api/v1/examples").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data: Value = response.json();
    let items = data.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Example 1");
    assert_eq!(items[1]["id"], 2);
    assert_eq!(items[1]["name"], "Example 2");
}

#[tokio::test]
async fn test_create_with_blank_name_is_rejected() {
    let server = in_memory_server();

    let response = server
        .post("/api/v1/examples")
        .json(&json!({ "name": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let data: Value = response.json();
    assert_eq!(data["error"], "Name cannot be empty");

    let list: Value = server.get("/api/v1/examples").await.json();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let server = in_memory_server();

    let response = server
        .post("/api/v1/examples")
        .json(&json!({ "description": "no name" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_rename_example() {
    let server = database_server().await;
    let created: Value = server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Old Name" }))
        .await
        .json();

    let response = server
        .patch("/api/v1/examples/1")
        .json(&json!({ "name": "New Name" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data: Value = response.json();
    assert_eq!(data["name"], "New Name");
    assert_eq!(data["created_at"], created["created_at"]);
    assert_ne!(data["updated_at"], created["updated_at"]);

    let fetched: Value = server.get("/api/v1/examples/1").await.json();
    assert_eq!(fetched, data);
}

#[tokio::test]
async fn test_rename_missing_or_blank() {
    let server = in_memory_server();
    server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Old Name" }))
        .await;

    let missing = server
        .patch("/api/v1/examples/42")
        .json(&json!({ "name": "New Name" }))
        .await;
    let blank = server
        .patch("/api/v1/examples/1")
        .json(&json!({ "name": " " }))
        .await;

    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(blank.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_name_returns_entity_message() {
    let server = in_memory_server();

    let created = server
        .post("/api/v1/examples")
        .json(&json!({ "name": "" }))
        .await;

    assert_eq!(created.status_code(), StatusCode::BAD_REQUEST);
    let data: Value = created.json();
    assert_eq!(data["error"], "Name cannot be empty");

    server
        .post("/api/v1/examples")
        .json(&json!({ "name": "Keep" }))
        .await;

    let renamed = server
        .patch("/api/v1/examples/1")
        .json(&json!({ "name": "" }))
        .await;

    assert_eq!(renamed.status_code(), StatusCode::BAD_REQUEST);
    let data: Value = renamed.json();
    assert_eq!(data["error"], "Name cannot be empty");

    let fetched: Value = server.get("/api/v1/examples/1").await.json();
    assert_eq!(fetched["name"], "Keep");
}

#[tokio::test]
async fn test_non_numeric_id_returns_json_error() {
    let server = in_memory_server();

    let get = server.get("/api/v1/examples/abc").await;
    let patch = server
        .patch("/api/v1/examples/abc")
        .json(&json!({ "name": "New Name" }))
        .await;

    for response in [get, patch] {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let data: Value = response.json();
        assert!(data["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid example id"));
    }
}
