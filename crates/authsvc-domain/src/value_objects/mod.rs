//! Value Objects
//!
//! Immutable domain values with no identity of their own.

/// Registration publish policy
pub mod policy;
/// User roles and access predicate
pub mod role;
/// Access token payloads
pub mod token;
/// Verification codes and cache lookups
pub mod verification;

pub use policy::PublishPolicy;
pub use role::Role;
pub use token::{IssuedToken, TokenPayload};
pub use verification::{CodeLookup, CodePurpose, VerificationCode};
