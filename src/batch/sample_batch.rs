// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::infrastructure::database::connection;
use crate::infrastructure::database::entities::example as example_entity;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    Statement, TransactionTrait,
};
use thiserror::Error;
use tracing::{error, info};

/// 批处理错误类型
#[derive(Error, Debug)]
pub enum BatchError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 批处理执行结果
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub tables: Vec<String>,
    pub example_count: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn duration_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// 连接数据库并执行批处理，结束后关闭连接池
pub async fn run_with_settings(settings: &Settings) -> Result<BatchReport, BatchError> {
    info!("Connecting to database...");
    let db = connection::create_pool(&settings.database).await?;
    info!("Database connection established");

    let result = run(&db, &settings.app.environment).await;

    if let Err(e) = db.close().await {
        error!(error = %e, "Failed to close database connection");
    } else {
        info!("Database connection closed");
    }

    result
}

/// 在单个事务中执行查询并记录统计结果
///
/// 事务在成功时提交，任何错误返回时随 drop 回滚
pub async fn run(db: &DatabaseConnection, environment: &str) -> Result<BatchReport, BatchError> {
    let started_at = Utc::now();
    info!(environment, start_time = %started_at.to_rfc3339(), "Batch execution started");

    let txn = db.begin().await?;

    let tables = list_tables(&txn).await?;
    info!("Found {} tables", tables.len());
    for table in &tables {
        info!("  - {}", table);
    }

    let example_count = example_entity::Entity::find().count(&txn).await?;
    info!(example_count, "Counted examples");

    txn.commit().await?;

    let report = BatchReport {
        tables,
        example_count,
        started_at,
        finished_at: Utc::now(),
    };
    record_summary(&report);

    Ok(report)
}

/// 批处理进程的退出码：成功 0，失败 1
pub fn exit_code<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn list_tables<C: ConnectionTrait>(conn: &C) -> Result<Vec<String>, BatchError> {
    let backend = conn.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Sqlite => {
            "SELECT name AS table_name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        }
        DatabaseBackend::MySql => {
            "SELECT TABLE_NAME AS table_name FROM information_schema.tables \
             WHERE table_schema = DATABASE() ORDER BY TABLE_NAME"
        }
        _ => {
            "SELECT table_name::text AS table_name FROM information_schema.tables \
             WHERE table_schema = 'public' ORDER BY table_name"
        }
    };

    let rows = conn
        .query_all(Statement::from_string(backend, sql.to_string()))
        .await?;

    let tables = rows
        .iter()
        .map(|row| row.try_get::<String>("", "table_name"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tables)
}

// Nothing is persisted yet; the summary only goes to the log.
fn record_summary(report: &BatchReport) {
    info!(
        execution_time = %report.started_at.to_rfc3339(),
        table_count = report.table_count(),
        example_count = report.example_count,
        "Batch summary recorded"
    );
    info!(
        end_time = %report.finished_at.to_rfc3339(),
        duration_secs = report.duration_secs(),
        "Batch execution completed successfully"
    );
}
