//! Email sender that writes messages to the log
//!
//! For local development: verification codes show up in the service log
//! instead of an inbox.

use async_trait::async_trait;
use authsvc_domain::error::Result;
use authsvc_domain::ports::EmailSender;
use tracing::info;

/// Email sender that logs instead of delivering
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmailSender;

impl LogEmailSender {
    /// Create a new log sender
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        info!(to, subject, body = html_body, "Email not delivered (log provider)");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
