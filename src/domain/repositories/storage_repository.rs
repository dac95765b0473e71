// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 对象不存在
    #[error("Object not found: {0}")]
    NotFound(String),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 对象存储仓库特质
///
/// 按键上传、下载和列出对象
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定键保存数据到存储中
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// 根据键从存储中检索数据
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// 列出存储中的全部键
    async fn list_keys(&self) -> Result<Vec<String>, StorageError>;

    /// 根据键从存储中删除数据
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// 检查存储中是否存在指定键
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// 上传本地文件
    async fn upload_file(&self, file_path: &Path, key: &str) -> Result<(), StorageError> {
        let data = tokio::fs::read(file_path).await?;
        self.put(key, &data).await
    }

    /// 下载对象到本地文件
    async fn download_file(&self, key: &str, file_path: &Path) -> Result<(), StorageError> {
        let data = self
            .get(key)
            .await?
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(file_path, data).await?;
        Ok(())
    }
}
