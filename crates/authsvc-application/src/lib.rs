//! Application Layer - Auth Service
//!
//! Use cases of the authentication service, orchestrating the domain ports
//! (repository, hasher, token service, code cache, email, events) without
//! knowing which adapters sit behind them.
//!
//! ## Use Cases
//!
//! - Registration and login
//! - Access token validation
//! - Verification codes for email confirmation and password reset
//! - Role-scoped profile reads, updates and password changes
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `authsvc-domain`: entities, value objects, errors and port traits
//! - Pure Rust libraries for async, logging and randomness

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
