// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// 健康检查使用的数据库探针
///
/// 未配置数据库（例如使用内存仓库测试时）为空
#[derive(Clone, Default)]
pub struct DatabaseProbe(pub Option<Arc<DatabaseConnection>>);

/// 健康检查端点
pub async fn health_check(Extension(probe): Extension<DatabaseProbe>) -> impl IntoResponse {
    let Some(db) = probe.0 else {
        return (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "not_configured" })),
        );
    };

    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        ),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "disconnected" })),
            )
        }
    }
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
