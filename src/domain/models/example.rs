// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::Serialize;
use thiserror::Error;

/// 尚未持久化的实体所使用的ID
pub const UNSAVED_ID: i32 = 0;

/// 实体校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 名称为空或仅包含空白字符
    #[error("Name cannot be empty")]
    EmptyName,
    /// 更新时间早于创建时间
    #[error("updated_at must not be earlier than created_at")]
    InvalidTimestamps,
}

/// 示例实体
///
/// 系统中唯一的业务实体。名称在任何时刻都不能为空，
/// `updated_at` 不早于 `created_at`，且每次改名都会严格递增。
///
/// 调用方拿到的是一个独立的值，修改它不会自动持久化，
/// 必须显式调用仓库的 `save`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    id: i32,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Example {
    /// 创建一个尚未持久化的实体（`id = 0`，时间戳均为当前时间）
    ///
    /// # 参数
    ///
    /// * `name` - 实体名称，不能为空或仅包含空白字符
    /// * `description` - 可选描述
    ///
    /// # 返回值
    ///
    /// * `Ok(Example)` - 新实体
    /// * `Err(ValidationError)` - 名称无效
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_name(&name)?;

        let now = current_timestamp();
        Ok(Self {
            id: UNSAVED_ID,
            name,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// 从持久化数据重建实体
    ///
    /// 仓库实现在读取记录时使用，会重新检查实体的不变量。
    pub fn restore(
        id: i32,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        ensure_name(&name)?;
        if updated_at < created_at {
            return Err(ValidationError::InvalidTimestamps);
        }

        Ok(Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        })
    }

    /// 返回带有仓库分配ID的副本
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// 修改名称
    ///
    /// 成功时更新 `name` 并推进 `updated_at`；失败时实体保持不变。
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), ValidationError> {
        let new_name = new_name.into();
        ensure_name(&new_name)?;

        // updated_at must move forward even when the clock has not
        let now = current_timestamp();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
        self.name = new_name;
        Ok(())
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 是否尚未被仓库持久化
    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }
}

fn ensure_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

// Relational stores keep microseconds; truncate so persisted values compare equal.
fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
