// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 邮件模块
///
/// 基于 SMTP 的邮件发送实现
pub mod smtp_client;
