//! Email Delivery Port

use crate::error::Result;
use async_trait::async_trait;

/// Outbound email delivery
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an HTML email to a single recipient
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;

    /// Get the name of this provider implementation
    fn provider_name(&self) -> &str;
}
