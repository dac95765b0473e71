// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::example_use_case::ExampleUseCaseError;
use crate::domain::models::example::ValidationError;

/// 应用错误类型
///
/// HTTP 边界上的统一错误。校验失败和资源不存在返回给调用方，
/// 其余错误记录完整日志后只返回通用信息，不泄露内部细节。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> Option<(StatusCode, String)> {
        if let Some(err) = self.0.downcast_ref::<ExampleUseCaseError>() {
            return match err {
                ExampleUseCaseError::InvalidRequest(msg) => {
                    Some((StatusCode::BAD_REQUEST, msg.clone()))
                }
                ExampleUseCaseError::Validation(e) => {
                    Some((StatusCode::BAD_REQUEST, e.to_string()))
                }
                ExampleUseCaseError::NotFound => {
                    Some((StatusCode::NOT_FOUND, err.to_string()))
                }
                ExampleUseCaseError::Repository(_) => None,
            };
        }

        self.0
            .downcast_ref::<ValidationError>()
            .map(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.status_and_message() {
            Some(known) => known,
            None => {
                error!(error = ?self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
