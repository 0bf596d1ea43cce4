//! User Repository Interface

use crate::entities::{User, UserField};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: User Account Persistence
///
/// Implementations enforce email uniqueness atomically and report a
/// violation as `Error::DuplicateKey { field: "email" }`. Lookups return
/// `Ok(None)` for absent users.
///
/// # Example
///
/// ```ignore
/// user.phone = "+7 700 000 0000".into();
/// let saved = repo.update(&user, &[UserField::Phone, UserField::UpdatedAt]).await?;
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account
    async fn create(&self, user: &User) -> Result<()>;

    /// Find an account by email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find an account by identifier
    async fn get_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Write the listed fields of `user` and return the stored account
    ///
    /// # Errors
    ///
    /// `NothingToUpdate` for an empty field list, `NotFound` when the account
    /// does not exist, `DuplicateKey` when an email change collides.
    async fn update(&self, user: &User, fields: &[UserField]) -> Result<User>;

    /// Remove an account; removing an absent account is not an error
    async fn delete(&self, id: &str) -> Result<()>;
}
