//! Provider-specific constants

/// Key prefix of verification codes stored in Redis
pub const REDIS_CODE_KEY_PREFIX: &str = "authsvc:verification_code:";

/// Default Moka capacity for verification codes
pub const MOKA_DEFAULT_CAPACITY: u64 = 100_000;

/// Default subject for registration events
pub const DEFAULT_USER_REGISTERED_SUBJECT: &str = "user.registered";
