//! Use case implementations

pub mod user_service;

pub use user_service::{UserServiceDeps, UserServiceImpl};
