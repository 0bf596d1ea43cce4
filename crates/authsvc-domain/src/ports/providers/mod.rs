//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | PasswordHasher | Salted password hashing and verification |
//! | TokenService | Signed access token issuance and validation |
//! | CodeCache | TTL store of verification codes |
//! | EmailSender | Outbound email delivery |

/// Verification code cache port
pub mod cache;
/// Password and token ports
pub mod crypto;
/// Email delivery port
pub mod email;

pub use cache::CodeCache;
pub use crypto::{PasswordHasher, TokenService};
pub use email::EmailSender;
