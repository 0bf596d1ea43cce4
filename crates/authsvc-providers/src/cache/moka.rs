//! Moka in-memory verification code cache
//!
//! Each entry expires at its own `expires_at`, through a per-entry
//! [`Expiry`] policy. Overwriting a user's entry recomputes the expiry from
//! the new code, so a fresh code never inherits the old deadline.
//!
//! ## Example
//!
//! ```ignore
//! use authsvc_providers::cache::MokaCodeCache;
//!
//! let cache = MokaCodeCache::with_capacity(10_000);
//! cache.set(&code).await?;
//! ```

use crate::constants::MOKA_DEFAULT_CAPACITY;
use async_trait::async_trait;
use authsvc_domain::error::Result;
use authsvc_domain::ports::CodeCache;
use authsvc_domain::value_objects::{CodeLookup, VerificationCode};
use chrono::Utc;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

/// Expires every entry at the `expires_at` of the code it holds
struct CodeExpiry;

impl CodeExpiry {
    fn time_left(code: &VerificationCode) -> Duration {
        code.remaining_ttl(Utc::now()).unwrap_or(Duration::ZERO)
    }
}

impl Expiry<String, VerificationCode> for CodeExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &VerificationCode,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Self::time_left(value))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &VerificationCode,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(Self::time_left(value))
    }
}

/// Moka-based verification code cache
///
/// Codes are lost on restart and not shared between instances; use the
/// Redis provider for multi-instance deployments.
#[derive(Clone)]
pub struct MokaCodeCache {
    cache: Cache<String, VerificationCode>,
}

impl Default for MokaCodeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCodeCache {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MOKA_DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `max_capacity` codes
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(CodeExpiry)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl CodeCache for MokaCodeCache {
    async fn set(&self, code: &VerificationCode) -> Result<()> {
        self.cache.insert(code.user_id.clone(), code.clone()).await;
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<CodeLookup> {
        Ok(self.cache.get(user_id).await.into())
    }

    async fn delete(&self, user_id: &str) -> Result<()> {
        self.cache.invalidate(user_id).await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}
