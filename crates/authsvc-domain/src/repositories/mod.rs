//! Repository interfaces

/// User account persistence
pub mod user_repository;

pub use user_repository::UserRepository;
