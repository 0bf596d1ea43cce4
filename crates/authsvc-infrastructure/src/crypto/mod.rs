//! Credential services
//!
//! - Password hashing with bcrypt (default) or Argon2id
//! - HS256 access token issuance and validation

mod jwt;
mod password;

pub use jwt::JwtTokenService;
pub use password::PasswordService;
