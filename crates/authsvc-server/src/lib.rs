//! # Auth Service Server
//!
//! gRPC transport of the authentication service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Default config locations + AUTHSVC__* environment
//!     authsvc_server::run(None).await
//! }
//! ```
//!
//! ## Request Pipeline
//!
//! Every RPC passes `logging -> auth -> handler`:
//!
//! | Stage | Module | Role |
//! |-------|--------|------|
//! | Logging | [`interceptors::logging`] | request id, span, timing |
//! | Auth | [`interceptors::auth`] | bearer token, role check, caller identity |
//! | Handler | [`handlers`] | argument validation, use case call, status mapping |
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AuthGrpcService`] | Generated `AuthService` implementation |
//! | [`AuthServiceBuilder`] | Builder wiring the user and token services |

pub mod args;
pub mod builder;
pub mod constants;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod init;
pub mod interceptors;
pub mod methods;
pub mod proto;
pub mod service;

pub use builder::{AuthServiceBuilder, BuilderError};
pub use init::{run, write_default_config};
pub use service::AuthGrpcService;
