//! Authentication configuration types

use crate::constants::{BCRYPT_DEFAULT_COST, JWT_MIN_SECRET_LEN};
use authsvc_domain::constants::{DEFAULT_TOKEN_TTL_SECS, DEFAULT_VERIFICATION_CODE_TTL_SECS};
use serde::{Deserialize, Serialize};

pub use authsvc_domain::value_objects::PublishPolicy;

/// Password hashing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    /// bcrypt with a configurable cost
    Bcrypt,
    /// Argon2id with default parameters
    Argon2,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 signing secret
    ///
    /// **REQUIRED**. Configure via `AUTHSVC__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file.
    pub secret: String,

    /// Access token lifetime in seconds
    pub expiration_secs: u64,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured, the loader rejects it otherwise)
/// - 24 hour token lifetime
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl JwtConfig {
    /// Whether the secret is long enough to sign with
    pub fn has_usable_secret(&self) -> bool {
        self.secret.len() >= JWT_MIN_SECRET_LEN
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Algorithm for new hashes
    pub algorithm: PasswordAlgorithm,

    /// bcrypt cost factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}

/// Verification code configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Lifetime of a verification code in seconds
    pub code_ttl_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: DEFAULT_VERIFICATION_CODE_TTL_SECS,
        }
    }
}

/// Registration configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Handling of event publish failures
    pub publish_policy: PublishPolicy,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Registration configuration
    #[serde(default)]
    pub registration: RegistrationConfig,
}
