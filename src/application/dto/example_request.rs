// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建示例的请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateExampleDto {
    #[validate(length(max = 255))]
    pub name: String,
    pub description: Option<String>,
}

impl CreateExampleDto {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

/// 修改示例名称的请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RenameExampleDto {
    #[validate(length(max = 255))]
    pub name: String,
}
