//! Password hashing service using bcrypt or Argon2
//!
//! Hashing is CPU bound and runs on the blocking thread pool. Verification
//! picks the algorithm from the hash prefix, so accounts created before an
//! algorithm switch keep working.
//!
//! bcrypt reads at most 72 bytes of input. The non-truncating variants are
//! used so a longer password is refused instead of silently cut.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;
use bcrypt::BcryptError;
use authsvc_domain::error::{Error, Result};
use authsvc_domain::ports::PasswordHasher;
use tracing::warn;

use crate::config::PasswordAlgorithm;
use crate::constants::{BCRYPT_DEFAULT_COST, BCRYPT_MAX_COST, BCRYPT_MIN_COST};

/// Password hashing service
#[derive(Debug, Clone)]
pub struct PasswordService {
    algorithm: PasswordAlgorithm,
    bcrypt_cost: u32,
}

impl PasswordService {
    /// Create a bcrypt-backed service with the given cost
    pub fn bcrypt(cost: u32) -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: cost,
        }
    }

    /// Create an Argon2id-backed service with default parameters
    pub fn argon2() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }

    /// Create a service for the configured algorithm
    pub fn from_algorithm(algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Self {
        Self {
            algorithm,
            bcrypt_cost,
        }
    }

    /// Algorithm used for new hashes
    pub fn algorithm(&self) -> PasswordAlgorithm {
        self.algorithm
    }

    /// Hash a password synchronously
    pub fn hash_password(&self, password: &str) -> Result<String> {
        match self.algorithm {
            PasswordAlgorithm::Bcrypt => {
                if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.bcrypt_cost) {
                    return Err(Error::config(format!(
                        "bcrypt cost {} outside {BCRYPT_MIN_COST}..={BCRYPT_MAX_COST}",
                        self.bcrypt_cost
                    )));
                }
                bcrypt::non_truncating_hash(password, self.bcrypt_cost).map_err(|e| match e {
                    BcryptError::Truncation(len) => Error::invalid_argument(format!(
                        "password is {len} bytes, bcrypt accepts at most 72"
                    )),
                    e => Error::infrastructure_with_source("Password hashing failed", e),
                })
            }
            PasswordAlgorithm::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))
            }
        }
    }

    /// Verify a password against a hash produced by either algorithm
    pub fn verify_password(password: &str, hash: &str) -> bool {
        if hash.starts_with("$argon2") {
            return match PasswordHash::new(hash) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    warn!(error = %e, "Stored Argon2 hash is malformed");
                    false
                }
            };
        }

        match bcrypt::non_truncating_verify(password, hash) {
            Ok(matches) => matches,
            // longer than any password bcrypt could have hashed
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => {
                warn!(error = %e, "Stored bcrypt hash is malformed");
                false
            }
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::bcrypt(BCRYPT_DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for PasswordService {
    async fn hash(&self, plain: &str) -> Result<String> {
        let service = self.clone();
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || service.hash_password(&plain))
            .await
            .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, hash: &str, plain: &str) -> bool {
        let hash = hash.to_owned();
        let plain = plain.to_owned();
        match tokio::task::spawn_blocking(move || Self::verify_password(&plain, &hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
