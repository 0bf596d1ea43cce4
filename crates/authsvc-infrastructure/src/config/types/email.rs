//! Outbound email configuration types

use crate::constants::DEFAULT_SMTP_PORT;
use serde::{Deserialize, Serialize};

/// Email providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// SMTP relay
    Smtp,
    /// Writes messages to the log instead of sending them
    #[default]
    Log,
}

/// Email configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Email provider
    pub provider: EmailProvider,

    /// Sender address, e.g. `Auth Service <no-reply@example.com>`
    pub from: String,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_username: Option<String>,

    /// SMTP password
    pub smtp_password: Option<String>,

    /// Upgrade the connection with STARTTLS instead of implicit TLS
    pub starttls: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Log,
            from: "no-reply@localhost".to_string(),
            smtp_host: "localhost".to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_username: None,
            smtp_password: None,
            starttls: true,
        }
    }
}
