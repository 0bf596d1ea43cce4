//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, CacheConfig, EmailConfig, EventBusConfig, LoggingConfig, ServerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Verification code cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// EventBus configuration
    #[serde(default)]
    pub event_bus: EventBusConfig,
    /// Outbound email configuration
    #[serde(default)]
    pub email: EmailConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
