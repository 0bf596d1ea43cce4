//! gRPC server configuration types

use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for socket address parsing
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
