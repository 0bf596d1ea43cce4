//! Per-call middleware
//!
//! Every RPC runs as `logging -> auth -> handler`: the logging stage wraps
//! the whole call, so rejections from the auth stage are logged and returned
//! unchanged.

pub mod auth;
pub mod logging;

pub use auth::{AuthInterceptor, authenticated_user};
pub use logging::{log_call, request_id};
