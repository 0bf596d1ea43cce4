//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. The domain
//! defines the traits; providers and infrastructure implement them.
//!
//! ## Organization
//!
//! - **infrastructure/** - Cross-service plumbing (event publishing)
//! - **providers/** - Credential, cache and email services

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::UserEventPublisher;
pub use providers::{CodeCache, EmailSender, PasswordHasher, TokenService};
