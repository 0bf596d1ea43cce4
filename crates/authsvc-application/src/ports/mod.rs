//! Application Port Interfaces
//!
//! Contracts exposed to transports (`services`) and the seams the use cases
//! depend on beyond the domain ports (`code_generator`).

pub mod services;

pub use services::{CodeGenerator, UserServiceInterface};
