//! Domain entities

/// User account
pub mod user;

pub use user::{UpdateProfileParams, User, UserField};
