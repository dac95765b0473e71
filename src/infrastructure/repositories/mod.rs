// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现：
/// 基于 SeaORM 的数据库实现，以及供测试使用的内存实现
pub mod example_repo_impl;
pub mod in_memory_example_repo;
