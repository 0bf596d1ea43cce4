//! Null user event publisher
//!
//! Accepts and discards every event. Used when no event bus is configured.

use async_trait::async_trait;
use authsvc_domain::error::Result;
use authsvc_domain::events::UserRegisteredEvent;
use authsvc_domain::ports::UserEventPublisher;
use tracing::debug;

/// Publisher that drops events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUserEventPublisher;

impl NullUserEventPublisher {
    /// Create a new null publisher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserEventPublisher for NullUserEventPublisher {
    async fn publish_user_registered(&self, event: &UserRegisteredEvent) -> Result<()> {
        debug!(user_id = %event.user_id, "Dropping user registered event (null publisher)");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
