//! Infrastructure layer constants

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "AUTHSVC";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "authsvc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "authsvc";

// ============================================================================
// Server
// ============================================================================

/// Default bind host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default gRPC port
pub const DEFAULT_SERVER_PORT: u16 = 50051;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Authentication
// ============================================================================

/// Minimum accepted length of the JWT signing secret
pub const JWT_MIN_SECRET_LEN: usize = 32;

/// bcrypt cost used when none is configured
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Lowest cost bcrypt accepts
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const BCRYPT_MAX_COST: u32 = 31;

/// Leeway applied to `exp` checks, in seconds
pub const JWT_EXPIRY_LEEWAY_SECS: u64 = 0;

// ============================================================================
// Providers
// ============================================================================

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

/// Default Moka capacity for verification codes
pub const DEFAULT_CODE_CACHE_CAPACITY: u64 = 100_000;

/// Default NATS URL
pub const DEFAULT_NATS_URL: &str = "nats://127.0.0.1:4222";

/// Default NATS client name
pub const DEFAULT_NATS_CLIENT_NAME: &str = "authsvc";

/// Subject that carries registration events
pub const USER_REGISTERED_SUBJECT: &str = "user.registered";

/// Default SMTP submission port
pub const DEFAULT_SMTP_PORT: u16 = 587;

// ============================================================================
// Logging
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "AUTHSVC_LOG";
