//! # Domain Layer
//!
//! Core business types of the authentication service. Everything here is
//! free of transport, storage and runtime concerns.
//!
//! ## Organization
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | `User` and profile update parameters |
//! | [`value_objects`] | `Role`, `TokenPayload`, `VerificationCode`, `CodePurpose`, `CodeLookup` |
//! | [`events`] | `UserRegisteredEvent` |
//! | [`ports`] | Boundary traits implemented by infrastructure and providers |
//! | [`repositories`] | `UserRepository` persistence contract |
//! | [`error`] | Domain error taxonomy and `Result` alias |
//! | [`constants`] | Verification and token defaults |

/// Domain-level constants
pub mod constants;
/// Core entities
pub mod entities;
/// Error taxonomy
pub mod error;
/// Domain events
pub mod events;
/// Port traits
pub mod ports;
/// Repository interfaces
pub mod repositories;
/// Value objects
pub mod value_objects;

pub use entities::{UpdateProfileParams, User, UserField};
pub use error::{Error, Result};
pub use events::UserRegisteredEvent;
pub use value_objects::{
    CodeLookup, CodePurpose, IssuedToken, PublishPolicy, Role, TokenPayload, VerificationCode,
};
