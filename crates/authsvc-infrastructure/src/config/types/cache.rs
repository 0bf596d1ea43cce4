//! Verification code cache configuration types

use crate::constants::{DEFAULT_CODE_CACHE_CAPACITY, DEFAULT_REDIS_URL};
use serde::{Deserialize, Serialize};

/// Cache providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheProvider {
    /// In-process cache (Moka), codes are lost on restart
    #[default]
    Moka,
    /// Shared cache (Redis)
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache provider
    pub provider: CacheProvider,

    /// Redis URL (for Redis provider)
    pub redis_url: String,

    /// Maximum number of entries (for Moka provider)
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheProvider::Moka,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            max_capacity: DEFAULT_CODE_CACHE_CAPACITY,
        }
    }
}
