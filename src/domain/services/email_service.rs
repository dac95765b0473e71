// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 邮件错误类型
#[derive(Error, Debug)]
pub enum EmailError {
    /// 邮件地址无效
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    /// 邮件内容构建失败
    #[error("Failed to build message: {0}")]
    Build(String),
    /// 投递失败
    #[error("Failed to deliver message: {0}")]
    Transport(String),
}

/// 待发送的邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// 为空时使用发送器配置的默认发件人
    pub from: Option<String>,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// 邮件发送服务特质
///
/// 发送一次，不重试；失败直接返回给调用方。
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// 发送邮件
    ///
    /// # 参数
    ///
    /// * `message` - 邮件内容
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 发送成功
    /// * `Err(EmailError)` - 地址无效或投递失败
    async fn send_email(&self, message: &EmailMessage) -> Result<(), EmailError>;
}
