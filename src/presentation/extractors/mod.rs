// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 解析路径参数，失败时返回统一的 JSON 错误
pub mod example_id;
