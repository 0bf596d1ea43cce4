//! Verification Code Cache Port
//!
//! TTL-bound storage of the single active verification code of each user.
//!
//! ## Semantics
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | `set` | Stores under `code.user_id`, replacing any previous code, until `code.expires_at` |
//! | `get` | `Found(code)` or `Miss`; expired entries are a `Miss` |
//! | `delete` | Idempotent; absent keys are not an error |

use crate::error::Result;
use crate::value_objects::{CodeLookup, VerificationCode};
use async_trait::async_trait;

/// Verification code storage
#[async_trait]
pub trait CodeCache: Send + Sync {
    /// Store or overwrite the code of `code.user_id`
    async fn set(&self, code: &VerificationCode) -> Result<()>;

    /// Look up the active code of a user
    async fn get(&self, user_id: &str) -> Result<CodeLookup>;

    /// Remove the code of a user
    async fn delete(&self, user_id: &str) -> Result<()>;

    /// Get the name of this provider implementation
    fn provider_name(&self) -> &str;
}
