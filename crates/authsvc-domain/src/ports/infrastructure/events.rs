//! User Event Publisher Port
//!
//! Defines the contract for announcing account lifecycle events to other
//! services. Implementations (NATS, null) live in `authsvc-providers`.

use crate::error::Result;
use crate::events::UserRegisteredEvent;
use async_trait::async_trait;

/// Publisher of user lifecycle events
#[async_trait]
pub trait UserEventPublisher: Send + Sync {
    /// Announce a newly registered account
    ///
    /// Returns once the event has been handed to the transport, not once
    /// consumers have processed it.
    async fn publish_user_registered(&self, event: &UserRegisteredEvent) -> Result<()>;

    /// Get the name of this provider implementation
    fn provider_name(&self) -> &str;
}
