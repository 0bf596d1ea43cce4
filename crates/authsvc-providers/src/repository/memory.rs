//! In-memory user repository
//!
//! Process-local storage for development and tests. Email uniqueness is
//! checked under the write lock, so concurrent registrations of one address
//! cannot both succeed.

use async_trait::async_trait;
use authsvc_domain::entities::{User, UserField};
use authsvc_domain::error::{Error, Result};
use authsvc_domain::repositories::UserRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// User repository backed by a `HashMap` keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no account is stored
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn email_taken(users: &HashMap<String, User>, email: &str, except_id: &str) -> bool {
    users
        .values()
        .any(|u| u.id != except_id && u.email.eq_ignore_ascii_case(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(Error::duplicate_key("id"));
        }
        if email_taken(&users, &user.email, &user.id) {
            return Err(Error::duplicate_key("email"));
        }
        users.insert(user.id.clone(), user.clone());
        debug!(user_id = %user.id, "User stored");
        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn update(&self, user: &User, fields: &[UserField]) -> Result<User> {
        if fields.is_empty() {
            return Err(Error::NothingToUpdate);
        }

        let mut users = self.users.write().await;
        if fields.contains(&UserField::Email) && email_taken(&users, &user.email, &user.id) {
            return Err(Error::duplicate_key("email"));
        }
        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| Error::not_found(format!("user {}", user.id)))?;

        for field in fields {
            match field {
                UserField::Email => stored.email.clone_from(&user.email),
                UserField::Username => stored.username.clone_from(&user.username),
                UserField::Phone => stored.phone.clone_from(&user.phone),
                UserField::Password => stored.password_hash.clone_from(&user.password_hash),
                UserField::Verified => stored.verified = user.verified,
                UserField::UpdatedAt => stored.updated_at = user.updated_at,
            }
        }

        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.users.write().await.remove(id);
        Ok(())
    }
}
