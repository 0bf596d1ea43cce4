//! SMTP email sender built on lettre
//!
//! ## Example
//!
//! ```ignore
//! use authsvc_providers::email::{SmtpEmailSender, SmtpSettings};
//!
//! let sender = SmtpEmailSender::new(&SmtpSettings {
//!     host: "smtp.example.com".into(),
//!     port: 587,
//!     username: Some("mailer".into()),
//!     password: Some("secret".into()),
//!     from: "Auth <no-reply@example.com>".into(),
//!     starttls: true,
//! })?;
//! ```

use async_trait::async_trait;
use authsvc_domain::error::{Error, Result};
use authsvc_domain::ports::EmailSender;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// Connection settings of the SMTP relay
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender mailbox, e.g. `Auth <no-reply@example.com>`
    pub from: String,
    /// STARTTLS upgrade instead of implicit TLS
    pub starttls: bool,
}

/// Email sender relaying through SMTP
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    /// Build the transport; no connection is opened until the first send
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let from = settings
            .from
            .parse::<Mailbox>()
            .map_err(|e| Error::config_with_source("Invalid sender address", e))?;

        let builder = if settings.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        }
        .map_err(|e| Error::config_with_source("Invalid SMTP relay", e))?;

        let mut builder = builder.port(settings.port);
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let recipient = to
            .parse::<Mailbox>()
            .map_err(|e| Error::invalid_argument(format!("Invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| Error::infrastructure_with_source("Failed to build email", e))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Error::network_with_source("SMTP delivery failed", e))?;

        debug!(subject, "Email sent");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "smtp"
    }
}
