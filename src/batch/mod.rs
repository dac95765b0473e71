// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 批处理模块
///
/// 由外部调度器定期启动的一次性任务
pub mod sample_batch;
