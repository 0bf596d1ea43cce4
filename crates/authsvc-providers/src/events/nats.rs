//! NATS user event publisher
//!
//! Serializes events to JSON and publishes them on a subject
//! (`user.registered` by default). Each publish is flushed so connection
//! problems surface to the caller instead of sitting in the client buffer.
//!
//! ## Example
//!
//! ```ignore
//! use authsvc_providers::events::NatsUserEventPublisher;
//!
//! let publisher = NatsUserEventPublisher::with_options(
//!     "nats://localhost:4222",
//!     "user.registered",
//!     Some("authsvc"),
//!     Duration::from_secs(5),
//! ).await?;
//! ```

use crate::constants::DEFAULT_USER_REGISTERED_SUBJECT;
use async_nats::Client;
use async_trait::async_trait;
use authsvc_domain::error::{Error, Result};
use authsvc_domain::events::UserRegisteredEvent;
use authsvc_domain::ports::UserEventPublisher;
use std::time::Duration;
use tracing::{debug, info};

/// User event publisher using NATS
pub struct NatsUserEventPublisher {
    client: Client,
    subject: String,
}

impl NatsUserEventPublisher {
    /// Connect with the default subject
    pub async fn new(url: &str) -> Result<Self> {
        Self::with_options(url, DEFAULT_USER_REGISTERED_SUBJECT, None, Duration::from_secs(5))
            .await
    }

    /// Connect with a custom subject, client name and connection timeout
    pub async fn with_options(
        url: &str,
        subject: &str,
        client_name: Option<&str>,
        connection_timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to NATS server at {}", url);

        let mut options = async_nats::ConnectOptions::new().connection_timeout(connection_timeout);
        if let Some(name) = client_name {
            options = options.name(name);
        }

        let client = options.connect(url).await.map_err(|e| {
            Error::network_with_source(format!("Failed to connect to NATS server at {url}"), e)
        })?;

        info!("Connected to NATS server at {}", url);

        Ok(Self {
            client,
            subject: subject.to_string(),
        })
    }

    /// Get the configured subject
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl std::fmt::Debug for NatsUserEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsUserEventPublisher")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UserEventPublisher for NatsUserEventPublisher {
    async fn publish_user_registered(&self, event: &UserRegisteredEvent) -> Result<()> {
        let payload = serde_json::to_vec(event)?;

        self.client
            .publish(self.subject.clone(), payload.into())
            .await
            .map_err(|e| Error::network_with_source("Failed to publish event to NATS", e))?;
        self.client
            .flush()
            .await
            .map_err(|e| Error::network_with_source("Failed to flush NATS connection", e))?;

        debug!(user_id = %event.user_id, "Published event to NATS subject '{}'", self.subject);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "nats"
    }
}
