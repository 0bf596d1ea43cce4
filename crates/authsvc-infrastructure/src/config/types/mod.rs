//! Configuration types module

pub mod app;
pub mod auth;
pub mod cache;
pub mod email;
pub mod event_bus;
pub mod logging;
pub mod server;

pub use app::AppConfig;
pub use auth::{
    AuthConfig, JwtConfig, PasswordAlgorithm, PasswordConfig, PublishPolicy, RegistrationConfig,
    VerificationConfig,
};
pub use cache::{CacheConfig, CacheProvider};
pub use email::{EmailConfig, EmailProvider};
pub use event_bus::{EventBusConfig, EventBusProvider};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
