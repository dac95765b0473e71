// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::example_repository::ExampleRepository;
use crate::presentation::handlers::health_handler::DatabaseProbe;
use crate::presentation::handlers::{example_handler, health_handler};
use axum::{
    http::HeaderValue,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// 创建应用路由，仓库实现由类型参数指定
///
/// # 参数
///
/// * `api_prefix` - API 路由前缀，例如 `/api/v1`；为空时不嵌套
pub fn routes_with<R>(api_prefix: &str) -> Router
where
    R: ExampleRepository + 'static,
{
    let api = Router::new()
        .route("/health", get(health_handler::health_check))
        .route("/version", get(health_handler::version))
        .merge(example_routes::<R>());

    let prefix = api_prefix.trim_end_matches('/');
    if prefix.is_empty() {
        api
    } else {
        Router::new().nest(prefix, api)
    }
}

/// 示例资源路由
pub fn example_routes<R>() -> Router
where
    R: ExampleRepository + 'static,
{
    Router::new()
        .route(
            "/examples",
            get(example_handler::list_examples::<R>).post(example_handler::create_example::<R>),
        )
        .route(
            "/examples/{id}",
            get(example_handler::get_example::<R>).patch(example_handler::rename_example::<R>),
        )
}

/// 组装完整应用：路由、仓库扩展、健康检查探针、跨域与请求追踪
pub fn app<R>(settings: &Settings, repository: Arc<R>, probe: DatabaseProbe) -> Router
where
    R: ExampleRepository + 'static,
{
    routes_with::<R>(&settings.app.api_prefix)
        .layer(Extension(repository))
        .layer(Extension(probe))
        .layer(cors_layer(&settings.cors.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// 跨域配置
///
/// 配置中出现 `*` 时允许任意来源，此时不允许携带凭据
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
