// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::example::{Example, ValidationError};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 更新的目标记录不存在
    #[error("Record not found")]
    NotFound,
    /// 存储中的数据违反实体不变量
    #[error("Corrupted record {id}: {source}")]
    Corrupted {
        id: i32,
        #[source]
        source: ValidationError,
    },
}

/// 示例实体仓库特质
///
/// 定义与存储技术无关的持久化接口。查找不到记录属于正常结果，
/// 以 `Ok(None)` 表示，而不是错误。
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// 根据ID查找实体
    ///
    /// # 参数
    ///
    /// * `id` - 实体ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Example))` - 找到实体
    /// * `Ok(None)` - 实体不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Example>, RepositoryError>;

    /// 获取全部实体
    ///
    /// 顺序由实现决定。
    async fn find_all(&self) -> Result<Vec<Example>, RepositoryError>;

    /// 保存实体
    ///
    /// `id == 0` 时作为新记录插入并分配从 1 开始递增的ID；
    /// 否则更新已有记录，目标不存在时返回 `RepositoryError::NotFound`。
    ///
    /// # 返回值
    ///
    /// * `Ok(Example)` - 持久化后的实体（ID已填充）
    /// * `Err(RepositoryError)` - 保存失败
    async fn save(&self, example: &Example) -> Result<Example, RepositoryError>;

    /// 统计实体数量
    async fn count(&self) -> Result<u64, RepositoryError>;
}
