// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// 路径中的示例 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleId(pub i32);

impl<S> FromRequestParts<S> for ExampleId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ExampleId(id)),
            Err(rejection) => {
                let message = format!("Invalid example id: {}", rejection.body_text());
                let body = Json(json!({ "error": message }));
                Err((StatusCode::BAD_REQUEST, body).into_response())
            }
        }
    }
}
