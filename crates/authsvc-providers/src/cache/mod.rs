//! Verification code cache implementations
//!
//! | Provider | Feature | Description |
//! |----------|---------|-------------|
//! | MokaCodeCache | `cache-moka` | In-process, per-entry expiry |
//! | RedisCodeCache | `cache-redis` | Shared, `SET EX` expiry |

#[cfg(feature = "cache-moka")]
pub mod moka;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use self::moka::MokaCodeCache;
#[cfg(feature = "cache-redis")]
pub use self::redis::RedisCodeCache;
