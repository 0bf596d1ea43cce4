//! Redis verification code cache
//!
//! Stores each code as JSON under `authsvc:verification_code:<user_id>` with
//! `SET EX`, so Redis drops it when it expires. Suitable for multi-instance
//! deployments.
//!
//! ## Example
//!
//! ```ignore
//! use authsvc_providers::cache::RedisCodeCache;
//!
//! let cache = RedisCodeCache::connect("redis://localhost:6379/0").await?;
//! ```

use crate::constants::REDIS_CODE_KEY_PREFIX;
use async_trait::async_trait;
use authsvc_domain::error::{Error, Result};
use authsvc_domain::ports::CodeCache;
use authsvc_domain::value_objects::{CodeLookup, VerificationCode};
use chrono::Utc;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::{debug, info};

/// Redis-backed verification code cache
///
/// Uses a [`ConnectionManager`], which reconnects transparently and is cheap
/// to clone per command.
#[derive(Clone)]
pub struct RedisCodeCache {
    connection: ConnectionManager,
}

impl RedisCodeCache {
    /// Connect to Redis
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379/0")
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| Error::cache_with_source("Failed to create Redis client", e))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| {
                Error::cache_with_source(format!("Failed to connect to Redis at {url}"), e)
            })?;

        info!("Connected to Redis verification code cache");
        Ok(Self { connection })
    }

    fn key(user_id: &str) -> String {
        format!("{REDIS_CODE_KEY_PREFIX}{user_id}")
    }
}

#[async_trait]
impl CodeCache for RedisCodeCache {
    async fn set(&self, code: &VerificationCode) -> Result<()> {
        let key = Self::key(&code.user_id);
        let mut conn = self.connection.clone();

        let Some(ttl) = code.remaining_ttl(Utc::now()) else {
            // An already expired code still supersedes the previous one
            debug!(user_id = %code.user_id, "Expired code stored as a deletion");
            return self.delete(&code.user_id).await;
        };
        // EX takes whole seconds; round up
        let ttl_secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);

        let payload = serde_json::to_string(code)?;
        conn.set_ex::<_, _, ()>(&key, payload, ttl_secs)
            .await
            .map_err(|e| Error::cache_with_source("Redis SET failed", e))
    }

    async fn get(&self, user_id: &str) -> Result<CodeLookup> {
        let mut conn = self.connection.clone();

        let raw: Option<String> = conn
            .get(Self::key(user_id))
            .await
            .map_err(|e| Error::cache_with_source("Redis GET failed", e))?;

        match raw {
            Some(json) => Ok(CodeLookup::Found(serde_json::from_str(&json)?)),
            None => Ok(CodeLookup::Miss),
        }
    }

    async fn delete(&self, user_id: &str) -> Result<()> {
        let mut conn = self.connection.clone();

        conn.del::<_, ()>(Self::key(user_id))
            .await
            .map_err(|e| Error::cache_with_source("Redis DEL failed", e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}
