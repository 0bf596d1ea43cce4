//! Credential Provider Ports
//!
//! Password hashing and access token signing. Implementations live in
//! `authsvc-infrastructure` (`PasswordService`, `JwtTokenService`).

use crate::error::Result;
use crate::value_objects::{IssuedToken, Role, TokenPayload};
use async_trait::async_trait;

/// One-way salted password hashing
///
/// # Example
///
/// ```ignore
/// let hash = hasher.hash("correct horse").await?;
/// assert!(hasher.verify(&hash, "correct horse").await);
/// ```
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a self-salted encoded hash; two calls on the same input differ
    async fn hash(&self, plain: &str) -> Result<String>;

    /// Whether `plain` produced `hash`
    ///
    /// Never fails: malformed hashes and mismatches both yield `false`.
    /// The comparison runs in constant time.
    async fn verify(&self, hash: &str, plain: &str) -> bool;
}

/// Stateless signed access tokens
pub trait TokenService: Send + Sync {
    /// Sign a token for `user_id` with `role`, expiring after the configured TTL
    fn generate(&self, user_id: &str, role: Role) -> Result<IssuedToken>;

    /// Verify signature and expiry, then check the `sub`, `role` and `exp` claims
    ///
    /// # Errors
    ///
    /// `TokenExpired` once expired, `MissingClaim` when a required claim is
    /// absent or mistyped, `InvalidToken` for anything else.
    fn validate(&self, token: &str) -> Result<TokenPayload>;
}
