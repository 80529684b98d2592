//! Outbound mail strategies for the contact relay.
//!
//! Two interchangeable transports sit behind the `Mailer` trait: classic
//! SMTP (lettre) and the Resend transactional-email HTTP API. Neither is
//! canonical — deployment config picks one at startup.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("message build error: {0}")]
    Build(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// One message to dispatch: the site owner receives it, the visitor's
/// address goes in reply-to so the owner can answer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailerError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SMTP strategy (lettre)
// ────────────────────────────────────────────────────────────────────────────

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        username: &str,
        password: &str,
        from: &str,
    ) -> Result<Self, MailerError> {
        let credentials = Credentials::new(username.to_string(), password.to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from: from.to_string(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| MailerError::Build(format!("from address: {e:?}")))?,
            )
            .to(mail
                .to
                .parse()
                .map_err(|e| MailerError::Build(format!("to address: {e:?}")))?)
            .reply_to(
                mail.reply_to
                    .parse()
                    .map_err(|e| MailerError::Build(format!("reply-to address: {e:?}")))?,
            )
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body.clone())
            .map_err(|e| MailerError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        debug!("contact mail dispatched via SMTP");
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resend strategy (transactional-email HTTP API)
// ────────────────────────────────────────────────────────────────────────────

const RESEND_API_URL: &str = "https://api.resend.com/emails";

pub struct ResendMailer {
    client: Client,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

impl ResendMailer {
    pub fn new(api_key: String, from: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            from,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailerError> {
        let request = ResendRequest {
            from: &self.from,
            to: [mail.to.as_str()],
            subject: &mail.subject,
            html: &mail.html_body,
            reply_to: &mail.reply_to,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Transport(format!(
                "Resend returned {status}: {body}"
            )));
        }

        debug!("contact mail dispatched via Resend");
        Ok(())
    }
}
