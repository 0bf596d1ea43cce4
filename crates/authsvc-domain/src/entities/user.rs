//! User account entity

use crate::value_objects::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// `password_hash` only ever holds an encoded hash. Transports must not copy
/// it into responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier
    pub id: String,
    /// Unique email address
    pub email: String,
    /// Display name, may be empty
    pub username: String,
    /// Encoded password hash
    pub password_hash: String,
    /// Role of the account
    pub role: Role,
    /// Phone number, may be empty
    pub phone: String,
    /// Whether the email address has been confirmed
    pub verified: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create an unverified account with a fresh identifier
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            username: String::new(),
            password_hash: password_hash.into(),
            role,
            phone: String::new(),
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Persisted fields a repository update may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Email,
    Username,
    Phone,
    Password,
    Verified,
    UpdatedAt,
}

/// Profile changes requested for a user; empty strings mean "leave as is"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileParams {
    /// Target account
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub phone: String,
}
