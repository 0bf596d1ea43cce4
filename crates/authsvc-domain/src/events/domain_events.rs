//! Events emitted by the auth service for other services to consume

use crate::entities::User;
use crate::value_objects::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Published once an account has been persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegisteredEvent {
    /// Identifier of the new account
    pub user_id: String,
    /// Email of the new account
    pub email: String,
    /// Role of the new account
    pub role: Role,
    /// Creation time in UTC
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserRegisteredEvent {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
