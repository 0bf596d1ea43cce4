//! Application Service Port Interfaces

use async_trait::async_trait;
use authsvc_domain::entities::{UpdateProfileParams, User};
use authsvc_domain::error::Result;
use authsvc_domain::value_objects::{CodePurpose, IssuedToken, Role, TokenPayload};

// ============================================================================
// User Service Interface
// ============================================================================

/// User account use cases
///
/// Operations taking an `actor` are role-scoped: the actor's role must allow
/// acting on the target account (see `Role::can_act_on`), otherwise they fail
/// with `Error::PermissionDenied`.
#[async_trait]
pub trait UserServiceInterface: Send + Sync {
    /// Create an unverified account and announce it
    async fn register(&self, email: &str, password: &str, role: Role) -> Result<User>;

    /// Check credentials and issue an access token
    async fn login(&self, email: &str, password: &str) -> Result<(IssuedToken, TokenPayload)>;

    /// Decode and check an access token
    async fn validate_token(&self, token: &str) -> Result<TokenPayload>;

    /// Issue a code for `purpose` and mail it to the account owner
    async fn send_verification_code(&self, email: &str, purpose: CodePurpose) -> Result<()>;

    /// Check and consume a code; email verification codes mark the account verified
    async fn verify_code(&self, email: &str, code: &str, purpose: CodePurpose) -> Result<()>;

    /// Consume a reset code and set a new password
    async fn confirm_password_reset(&self, email: &str, code: &str, new_password: &str)
    -> Result<()>;

    /// Replace the password of `user_id` after checking the old one
    async fn change_password(
        &self,
        actor: &TokenPayload,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<()>;

    /// Apply the non-empty fields of `params` to the target account
    async fn update_profile(&self, actor: &TokenPayload, params: UpdateProfileParams)
    -> Result<User>;

    /// Read an account by id
    async fn get_user_by_id(&self, actor: &TokenPayload, user_id: &str) -> Result<User>;

    /// Read an account by email
    async fn get_user_by_email(&self, email: &str) -> Result<User>;

    /// Mark an account verified without a code
    async fn verify_account(&self, actor: &TokenPayload, user_id: &str) -> Result<User>;
}

// ============================================================================
// Code Generator
// ============================================================================

/// Source of verification code values
pub trait CodeGenerator: Send + Sync {
    /// Produce a zero-padded numeric code
    fn generate(&self) -> String;
}
