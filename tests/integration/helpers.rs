// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use example_api::config::settings::Settings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// 测试用配置（内存 SQLite、内存存储）
pub fn test_settings() -> Settings {
    Settings::default_builder()
        .unwrap()
        .set_override("database.url", "sqlite::memory:")
        .unwrap()
        .set_override("storage.storage_type", "memory")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

/// 创建已执行迁移的内存数据库
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}
