//! # Infrastructure Layer
//!
//! Cross-cutting technical services of the auth service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | `PasswordService` (bcrypt / Argon2id) and `JwtTokenService` (HS256) |
//! | [`config`] | Typed configuration and the figment loader |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Third-party error to domain error conversion |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use crypto::{JwtTokenService, PasswordService};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
