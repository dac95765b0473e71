// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SmtpSettings;
use crate::domain::services::email_service::{EmailError, EmailMessage, EmailSender};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// SMTP 邮件发送实现
///
/// 不使用 TLS 与认证，面向 MailHog 之类的本地中继
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    default_from: String,
}

impl SmtpEmailSender {
    pub fn new(settings: &SmtpSettings) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            .port(settings.port)
            .build();

        Self {
            transport,
            default_from: settings.from_address.clone(),
        }
    }

    /// 构建 RFC 5322 邮件
    pub fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailError> {
        let from = message.from.as_deref().unwrap_or(&self.default_from);

        Message::builder()
            .from(parse_mailbox(from)?)
            .to(parse_mailbox(&message.to)?)
            .subject(message.subject.clone())
            .body(message.body.clone())
            .map_err(|e| EmailError::Build(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| EmailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let email = self.build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}

/// 后台发送邮件，不等待结果也不重试，失败只记录日志
pub fn spawn_send(sender: Arc<dyn EmailSender>, message: EmailMessage) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = sender.send_email(&message).await {
            warn!(to = %message.to, error = %e, "Failed to send email");
        }
    })
}
