//! # Auth Service - Provider Implementations
//!
//! Adapters implementing the ports defined in `authsvc-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CodeCache` | Moka, Redis |
//! | Events | `UserEventPublisher` | Nats, Null |
//! | Email | `EmailSender` | Smtp, Log |
//! | Repository | `UserRepository` | InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! authsvc-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

pub use authsvc_domain::error::{Error, Result};
pub use authsvc_domain::ports::{CodeCache, EmailSender, UserEventPublisher};
pub use authsvc_domain::repositories::UserRepository;

/// Provider-specific constants
pub mod constants;

/// Verification code cache implementations
pub mod cache;

/// Email sender implementations
pub mod email;

/// User event publisher implementations
pub mod events;

/// User repository implementations
pub mod repository;
