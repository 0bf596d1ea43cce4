//! Access token value objects

use crate::value_objects::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity recovered from a validated access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject of the token
    pub user_id: String,
    /// Email of the subject, empty when the token does not carry it
    pub email: String,
    /// Role granted by the token
    pub role: Role,
    /// Issue time
    pub issued_at: DateTime<Utc>,
    /// Expiry as Unix seconds
    pub expires_at: i64,
}

/// Freshly signed access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded token
    pub token: String,
    /// Issue time
    pub issued_at: DateTime<Utc>,
    /// Expiry as Unix seconds
    pub expires_at: i64,
}
