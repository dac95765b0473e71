// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{setup_db, test_settings};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use example_api::infrastructure::repositories::example_repo_impl::ExampleRepositoryImpl;
use example_api::infrastructure::repositories::in_memory_example_repo::InMemoryExampleRepository;
use example_api::presentation::handlers::health_handler::DatabaseProbe;
use example_api::presentation::routes;
use std::sync::Arc;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证连接数据库时健康检查端点返回 connected
#[tokio::test]
async fn health_check_works() {
    let db = setup_db().await;
    let app = routes::app(
        &test_settings(),
        Arc::new(ExampleRepositoryImpl::new(db.clone())),
        DatabaseProbe(Some(db)),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let data: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["database"], "connected");
}

#[tokio::test]
async fn health_check_without_database() {
    let app = routes::app(
        &test_settings(),
        Arc::new(InMemoryExampleRepository::new()),
        DatabaseProbe::default(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_endpoint_returns_crate_version() {
    let app = routes::app(
        &test_settings(),
        Arc::new(InMemoryExampleRepository::new()),
        DatabaseProbe::default(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], env!("CARGO_PKG_VERSION").as_bytes());
}
