//! EventBus configuration types

use crate::constants::{DEFAULT_NATS_CLIENT_NAME, DEFAULT_NATS_URL, USER_REGISTERED_SUBJECT};
use serde::{Deserialize, Serialize};

/// EventBus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusProvider {
    /// Distributed message bus (NATS)
    Nats,
    /// Drops every event
    #[default]
    Null,
}

/// EventBus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBusConfig {
    /// EventBus provider to use
    pub provider: EventBusProvider,

    /// NATS server URL
    pub nats_url: String,

    /// NATS client name
    pub nats_client_name: String,

    /// Subject of registration events
    pub user_registered_subject: String,

    /// Connection timeout in milliseconds
    pub connection_timeout_ms: u64,
}

/// Returns default event bus configuration with:
/// - Null provider, so a fresh checkout runs without a NATS server
/// - Subject `user.registered`
impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusProvider::Null,
            nats_url: DEFAULT_NATS_URL.to_string(),
            nats_client_name: DEFAULT_NATS_CLIENT_NAME.to_string(),
            user_registered_subject: USER_REGISTERED_SUBJECT.to_string(),
            connection_timeout_ms: 5000,
        }
    }
}

impl EventBusConfig {
    /// Create config for NATS
    pub fn nats(url: impl Into<String>) -> Self {
        Self {
            provider: EventBusProvider::Nats,
            nats_url: url.into(),
            ..Default::default()
        }
    }
}
