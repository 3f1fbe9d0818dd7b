//! Outgoing mail.
//!
//! Messages are rendered from HTML templates with a single `{{data}}` placeholder. Without
//! SMTP configuration the mailer only logs what it would have sent.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::path::Path;

use crate::server::{
    config::Config,
    error::{mail::MailError, AppError},
};

const TEMPLATE_PLACEHOLDER: &str = "{{data}}";
const DEFAULT_RECOVERY_TEMPLATE: &str = include_str!("../../../templates/recovery.html");
const DEFAULT_NEW_PASSWORD_TEMPLATE: &str = include_str!("../../../templates/new_password.html");

const RECOVERY_SUBJECT: &str = "Восстановление пароля";
const NEW_PASSWORD_SUBJECT: &str = "Ваш пароль";

#[derive(Clone)]
enum MailTransport {
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
    },
    Log,
    #[cfg(test)]
    Channel(tokio::sync::mpsc::UnboundedSender<SentMail>),
}

/// Mail captured instead of sent.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Sends templated mail over SMTP, or logs it when SMTP is not configured.
#[derive(Clone)]
pub struct Mailer {
    transport: MailTransport,
    recovery_template: String,
    new_password_template: String,
}

impl Mailer {
    /// Builds the mailer from configuration, loading template overrides from disk.
    ///
    /// # Returns
    /// - `Err(AppError::MailErr)` - Template unreadable, invalid sender or bad SMTP host
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = match &config.smtp {
            Some(smtp) => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                    .map_err(MailError::from)?
                    .port(smtp.port)
                    .credentials(Credentials::new(smtp.login.clone(), smtp.password.clone()))
                    .build();
                let from = smtp.login.parse::<Mailbox>().map_err(MailError::from)?;

                MailTransport::Smtp { transport, from }
            }
            None => {
                tracing::warn!("SMTP is not configured, outgoing mail will only be logged");
                MailTransport::Log
            }
        };

        Ok(Self {
            transport,
            recovery_template: load_template(
                config.mail_recovery_template.as_deref(),
                DEFAULT_RECOVERY_TEMPLATE,
            )
            .await?,
            new_password_template: load_template(
                config.mail_new_password_template.as_deref(),
                DEFAULT_NEW_PASSWORD_TEMPLATE,
            )
            .await?,
        })
    }

    /// Mailer with built-in templates that never contacts a server.
    pub fn log_only() -> Self {
        Self {
            transport: MailTransport::Log,
            recovery_template: DEFAULT_RECOVERY_TEMPLATE.to_string(),
            new_password_template: DEFAULT_NEW_PASSWORD_TEMPLATE.to_string(),
        }
    }

    /// Mailer handing every message to a channel.
    #[cfg(test)]
    pub fn with_sender(sender: tokio::sync::mpsc::UnboundedSender<SentMail>) -> Self {
        Self {
            transport: MailTransport::Channel(sender),
            ..Self::log_only()
        }
    }

    pub async fn send_recovery_code(&self, to: &str, code: &str) -> Result<(), AppError> {
        let body = render(&self.recovery_template, code);
        self.send(to, RECOVERY_SUBJECT, body).await
    }

    pub async fn send_new_password(&self, to: &str, password: &str) -> Result<(), AppError> {
        let body = render(&self.new_password_template, password);
        self.send(to, NEW_PASSWORD_SUBJECT, body).await
    }

    async fn send(&self, to: &str, subject: &str, html: String) -> Result<(), AppError> {
        match &self.transport {
            MailTransport::Smtp { transport, from } => {
                let message = Message::builder()
                    .from(from.clone())
                    .to(to.parse::<Mailbox>().map_err(MailError::from)?)
                    .subject(subject)
                    .header(ContentType::TEXT_HTML)
                    .body(html)
                    .map_err(MailError::from)?;

                transport.send(message).await.map_err(MailError::from)?;
                tracing::debug!("Sent '{}' mail to {}", subject, to);
            }
            MailTransport::Log => {
                tracing::info!("Mail '{}' to {} not sent, SMTP disabled", subject, to);
                tracing::debug!("{}", html);
            }
            #[cfg(test)]
            MailTransport::Channel(sender) => {
                let _ = sender.send(SentMail {
                    to: to.to_string(),
                    subject: subject.to_string(),
                    html,
                });
            }
        }

        Ok(())
    }
}

fn render(template: &str, data: &str) -> String {
    template.replace(TEMPLATE_PLACEHOLDER, data)
}

async fn load_template(path: Option<&Path>, default: &str) -> Result<String, AppError> {
    let Some(path) = path else {
        return Ok(default.to_string());
    };

    tokio::fs::read_to_string(path).await.map_err(|source| {
        MailError::Template {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}
