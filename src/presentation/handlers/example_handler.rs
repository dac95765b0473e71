// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::example_request::{CreateExampleDto, RenameExampleDto},
        use_cases::example_use_case::ExampleUseCase,
    },
    domain::repositories::example_repository::ExampleRepository,
    presentation::{errors::AppError, extractors::example_id::ExampleId},
};

/// 创建示例
pub async fn create_example<R>(
    Extension(repository): Extension<Arc<R>>,
    Json(payload): Json<CreateExampleDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: ExampleRepository + 'static,
{
    let use_case = ExampleUseCase::new(repository);
    let example = use_case.create_example(payload).await?;
    Ok((StatusCode::CREATED, Json(example)))
}

/// 获取示例详情
pub async fn get_example<R>(
    Extension(repository): Extension<Arc<R>>,
    ExampleId(example_id): ExampleId,
) -> Result<Response, AppError>
where
    R: ExampleRepository + 'static,
{
    let use_case = ExampleUseCase::new(repository);
    let response = match use_case.get_example(example_id).await? {
        Some(example) => (StatusCode::OK, Json(example)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Example not found" })),
        )
            .into_response(),
    };
    Ok(response)
}

/// 示例列表
pub async fn list_examples<R>(
    Extension(repository): Extension<Arc<R>>,
) -> Result<impl IntoResponse, AppError>
where
    R: ExampleRepository + 'static,
{
    let use_case = ExampleUseCase::new(repository);
    let examples = use_case.list_examples().await?;
    Ok(Json(examples))
}

/// 修改示例名称
pub async fn rename_example<R>(
    Extension(repository): Extension<Arc<R>>,
    ExampleId(example_id): ExampleId,
    Json(payload): Json<RenameExampleDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: ExampleRepository + 'static,
{
    let use_case = ExampleUseCase::new(repository);
    let example = use_case.rename_example(example_id, payload).await?;
    Ok(Json(example))
}
