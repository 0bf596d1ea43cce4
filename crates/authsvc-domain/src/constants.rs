//! Domain layer constants

/// Number of digits in a verification code
pub const VERIFICATION_CODE_DIGITS: usize = 6;

/// Exclusive upper bound of the numeric verification code space
pub const VERIFICATION_CODE_SPACE: u32 = 1_000_000;

/// Default lifetime of a verification code in seconds (5 minutes)
pub const DEFAULT_VERIFICATION_CODE_TTL_SECS: u64 = 300;

/// Default access token lifetime in seconds (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// Token type reported alongside issued access tokens
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Longest accepted password in bytes; bcrypt ignores anything past this
pub const MAX_PASSWORD_BYTES: usize = 72;
