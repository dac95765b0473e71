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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 未设置 `APP_ENVIRONMENT` 时的运行环境
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 应用程序配置设置
///
/// 启动时构建一次，之后只读，通过 `Arc` 传递给各组件
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 应用基本信息
    pub app: AppSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 日志配置
    pub logging: LoggingSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// SMTP 配置
    pub smtp: SmtpSettings,
    /// 跨域配置
    pub cors: CorsSettings,
}

/// 应用基本信息
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// 项目名称
    pub project_name: String,
    /// API 路由前缀
    pub api_prefix: String,
    /// 运行环境 (development, staging, production)
    pub environment: String,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否记录SQL语句
    pub sql_logging: bool,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 未设置 RUST_LOG 时使用的过滤指令
    pub level: String,
    /// 输出格式
    pub format: LogFormat,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local, s3, memory)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
    /// S3 区域
    pub s3_region: Option<String>,
    /// S3 存储桶名称
    pub s3_bucket: Option<String>,
    /// S3 访问密钥
    pub s3_access_key: Option<String>,
    /// S3 密钥
    pub s3_secret_key: Option<String>,
    /// S3 端点 (可选，用于 MinIO 等兼容服务)
    pub s3_endpoint: Option<String>,
}

/// SMTP 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    /// SMTP 主机
    pub host: String,
    /// SMTP 端口
    pub port: u16,
    /// 默认发件人
    pub from_address: String,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 运行环境取自 `APP_ENVIRONMENT`，未设置时为 `development`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败（例如缺少 `database.url`）
    pub fn new() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        Self::builder_for(&environment)?.build()?.try_deserialize()
    }

    /// 指定运行环境的配置构建器
    ///
    /// 依次加载默认值、`config/default`、`config/{environment}`
    /// 以及 `EXAMPLE_API_` 前缀的环境变量（层级分隔符为 `__`）。
    /// `app.environment` 默认取 `environment`，配置文件和环境变量可以覆盖
    pub fn builder_for(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Self::default_builder()?
            .set_default("app.environment", environment)?
            .add_source(File::with_name("config/default").required(false));

        if environment != "default" {
            builder = builder
                .add_source(File::with_name(&format!("config/{}", environment)).required(false));
        }

        Ok(builder.add_source(
            Environment::with_prefix("EXAMPLE_API")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        ))
    }

    /// 仅包含默认值的配置构建器
    ///
    /// `database.url` 没有默认值，必须由后续来源提供
    pub fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.project_name", "Backend API")?
            .set_default("app.api_prefix", "/api/v1")?
            .set_default("app.environment", DEFAULT_ENVIRONMENT)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default DB pool settings
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sql_logging", false)?
            .set_default("logging.level", "info,example_api=debug")?
            .set_default("logging.format", "pretty")?
            // Default Storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            .set_default("storage.s3_region", "us-east-1")?
            .set_default("storage.s3_bucket", "app-bucket")?
            // Default SMTP settings (MailHog)
            .set_default("smtp.host", "mailhog")?
            .set_default("smtp.port", 1025)?
            .set_default("smtp.from_address", "noreply@example.com")?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])
    }

    /// 服务器监听地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
