//! User Service Use Case
//!
//! Registration, login, verification codes and role-scoped account
//! management. Every collaborator is a domain port behind an `Arc`, so the
//! same service runs against Redis/NATS/SMTP in production and in-memory
//! adapters in tests.

use crate::domain_services::{RandomCodeGenerator, verification_email};
use crate::ports::{CodeGenerator, UserServiceInterface};
use async_trait::async_trait;
use authsvc_domain::constants::{DEFAULT_VERIFICATION_CODE_TTL_SECS, MAX_PASSWORD_BYTES};
use authsvc_domain::entities::{UpdateProfileParams, User, UserField};
use authsvc_domain::error::{Error, OperationExt, Result};
use authsvc_domain::events::UserRegisteredEvent;
use authsvc_domain::ports::{
    CodeCache, EmailSender, PasswordHasher, TokenService, UserEventPublisher,
};
use authsvc_domain::repositories::UserRepository;
use authsvc_domain::value_objects::{
    CodeLookup, CodePurpose, IssuedToken, PublishPolicy, Role, TokenPayload, VerificationCode,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Collaborators of [`UserServiceImpl`]
#[derive(Clone)]
pub struct UserServiceDeps {
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub codes: Arc<dyn CodeCache>,
    pub email: Arc<dyn EmailSender>,
    pub events: Arc<dyn UserEventPublisher>,
}

/// User service implementation
pub struct UserServiceImpl {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    codes: Arc<dyn CodeCache>,
    email: Arc<dyn EmailSender>,
    events: Arc<dyn UserEventPublisher>,
    code_generator: Arc<dyn CodeGenerator>,
    code_ttl: Duration,
    publish_policy: PublishPolicy,
}

impl UserServiceImpl {
    /// Create a service with random codes, the default code lifetime and
    /// best-effort event publishing
    pub fn new(deps: UserServiceDeps) -> Self {
        Self {
            users: deps.users,
            hasher: deps.hasher,
            tokens: deps.tokens,
            codes: deps.codes,
            email: deps.email,
            events: deps.events,
            code_generator: Arc::new(RandomCodeGenerator),
            code_ttl: Duration::from_secs(DEFAULT_VERIFICATION_CODE_TTL_SECS),
            publish_policy: PublishPolicy::default(),
        }
    }

    /// Set the lifetime of issued verification codes
    #[must_use]
    pub fn with_code_ttl(mut self, ttl: Duration) -> Self {
        self.code_ttl = ttl;
        self
    }

    /// Set how registration treats event publish failures
    #[must_use]
    pub fn with_publish_policy(mut self, policy: PublishPolicy) -> Self {
        self.publish_policy = policy;
        self
    }

    /// Replace the verification code source
    #[must_use]
    pub fn with_code_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = generator;
        self
    }

    async fn find_by_email(&self, email: &str) -> Result<User> {
        self.users
            .get_by_email(email)
            .await
            .in_operation("find user by email")?
            .ok_or(Error::UserNotFound)
    }

    async fn find_by_id(&self, user_id: &str) -> Result<User> {
        self.users
            .get_by_id(user_id)
            .await
            .in_operation("find user by id")?
            .ok_or(Error::UserNotFound)
    }

    /// Fetch `user_id` and check that `actor` may act on it
    async fn find_scoped(&self, actor: &TokenPayload, user_id: &str) -> Result<User> {
        let target = self.find_by_id(user_id).await?;
        actor
            .role
            .ensure_can_act_on(&actor.user_id, &target.id, target.role)?;
        Ok(target)
    }

    async fn save(&self, user: &User, fields: &[UserField], operation: &str) -> Result<User> {
        self.users
            .update(user, fields)
            .await
            .map_err(|e| match e {
                Error::NotFound { .. } => Error::UserNotFound,
                Error::DuplicateKey { ref field } if field == "email" => Error::EmailAlreadyExists,
                other => other,
            })
            .in_operation(operation)
    }

    /// Check a submitted code against the stored one without consuming it
    ///
    /// Checks run in order: presence, value, expiry, purpose.
    async fn check_code(&self, user: &User, code: &str, purpose: CodePurpose) -> Result<()> {
        let stored = match self
            .codes
            .get(&user.id)
            .await
            .in_operation("read verification code")?
        {
            CodeLookup::Found(stored) => stored,
            CodeLookup::Miss => return Err(Error::CodeNotFound),
        };

        if stored.code != code {
            return Err(Error::CodeInvalid);
        }
        if stored.is_expired_at(Utc::now()) {
            return Err(Error::CodeExpired);
        }
        if stored.purpose != purpose {
            return Err(Error::InvalidPurpose);
        }
        Ok(())
    }

    async fn consume_code(&self, user: &User) -> Result<()> {
        self.codes
            .delete(&user.id)
            .await
            .in_operation("delete verification code")
    }

    async fn mark_verified(&self, mut user: User) -> Result<User> {
        user.verified = true;
        user.updated_at = Utc::now();
        self.save(&user, &[UserField::Verified, UserField::UpdatedAt], "mark user verified")
            .await
    }

    async fn store_password(&self, mut user: User, new_password: &str) -> Result<User> {
        user.password_hash = self
            .hasher
            .hash(new_password)
            .await
            .in_operation("hash password")?;
        user.updated_at = Utc::now();
        self.save(&user, &[UserField::Password, UserField::UpdatedAt], "store password")
            .await
    }

    async fn announce(&self, user: &User) -> Result<()> {
        let event = UserRegisteredEvent::from(user);
        match self.events.publish_user_registered(&event).await {
            Ok(()) => Ok(()),
            Err(e) => match self.publish_policy {
                PublishPolicy::BestEffort => {
                    warn!(
                        user_id = %user.id,
                        publisher = self.events.provider_name(),
                        error = %e,
                        "User registered event not published"
                    );
                    Ok(())
                }
                PublishPolicy::Required => Err(e.in_operation("publish user registered")),
            },
        }
    }
}

fn validate_registration(email: &str, password: &str, role: Role) -> Result<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(Error::invalid_argument("email must be a valid address"));
    }
    if password.is_empty() {
        return Err(Error::invalid_argument("password cannot be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(Error::invalid_argument(format!(
            "password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    if role == Role::Unspecified {
        return Err(Error::invalid_argument("role must be specified"));
    }
    Ok(())
}

fn require_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::invalid_argument("new password cannot be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(Error::invalid_argument(format!(
            "new password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    Ok(())
}

#[async_trait]
impl UserServiceInterface for UserServiceImpl {
    async fn register(&self, email: &str, password: &str, role: Role) -> Result<User> {
        validate_registration(email, password, role)?;

        let hash = self.hasher.hash(password).await.in_operation("hash password")?;
        let user = User::new(email.trim(), hash, role);

        self.users
            .create(&user)
            .await
            .map_err(|e| match e {
                Error::DuplicateKey { ref field } if field == "username" => {
                    Error::UsernameAlreadyExists
                }
                Error::DuplicateKey { .. } => Error::EmailAlreadyExists,
                other => other,
            })
            .in_operation("create user")?;

        self.announce(&user).await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<(IssuedToken, TokenPayload)> {
        let user = self.find_by_email(email).await?;

        if !self.hasher.verify(&user.password_hash, password).await {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(Error::InvalidCredentials);
        }

        let issued = self
            .tokens
            .generate(&user.id, user.role)
            .in_operation("issue access token")?;
        let payload = TokenPayload {
            user_id: user.id,
            email: user.email,
            role: user.role,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
        };

        debug!(user_id = %payload.user_id, "Access token issued");
        Ok((issued, payload))
    }

    async fn validate_token(&self, token: &str) -> Result<TokenPayload> {
        self.tokens.validate(token).in_operation("validate token")
    }

    async fn send_verification_code(&self, email: &str, purpose: CodePurpose) -> Result<()> {
        let user = self.find_by_email(email).await?;

        let value = self.code_generator.generate();
        let code = VerificationCode::new(&user.id, &value, purpose, self.code_ttl);
        self.codes
            .set(&code)
            .await
            .in_operation("store verification code")?;

        // The stored code stays valid if delivery fails; a retry overwrites it
        let template = verification_email(purpose, &value, self.code_ttl);
        self.email
            .send(&user.email, template.subject, &template.html_body)
            .await
            .in_operation("send verification email")?;

        info!(user_id = %user.id, %purpose, "Verification code sent");
        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str, purpose: CodePurpose) -> Result<()> {
        let user = self.find_by_email(email).await?;
        self.check_code(&user, code, purpose).await?;

        let user = match purpose {
            CodePurpose::EmailVerification => self.mark_verified(user).await?,
            // the password itself is set by confirm_password_reset
            CodePurpose::ResetPassword => user,
        };
        self.consume_code(&user).await?;

        info!(user_id = %user.id, %purpose, "Verification code accepted");
        Ok(())
    }

    async fn confirm_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<()> {
        require_password(new_password)?;
        let user = self.find_by_email(email).await?;
        self.check_code(&user, code, CodePurpose::ResetPassword).await?;

        if self.hasher.verify(&user.password_hash, new_password).await {
            return Err(Error::PasswordUnchanged);
        }

        let user = self.store_password(user, new_password).await?;
        self.consume_code(&user).await?;

        info!(user_id = %user.id, "Password reset");
        Ok(())
    }

    async fn change_password(
        &self,
        actor: &TokenPayload,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        require_password(new_password)?;
        let user = self.find_scoped(actor, user_id).await?;

        if !self.hasher.verify(&user.password_hash, old_password).await {
            warn!(user_id = %user.id, actor = %actor.user_id, "Password change rejected");
            return Err(Error::InvalidCredentials);
        }
        if old_password == new_password {
            return Err(Error::PasswordUnchanged);
        }

        let user = self.store_password(user, new_password).await?;

        info!(user_id = %user.id, actor = %actor.user_id, "Password changed");
        Ok(())
    }

    async fn update_profile(
        &self,
        actor: &TokenPayload,
        params: UpdateProfileParams,
    ) -> Result<User> {
        let mut user = self.find_scoped(actor, &params.user_id).await?;
        let mut fields = Vec::with_capacity(4);

        if !params.email.is_empty() && params.email != user.email {
            user.email = params.email;
            fields.push(UserField::Email);
        }
        if !params.username.is_empty() && params.username != user.username {
            user.username = params.username;
            fields.push(UserField::Username);
        }
        if !params.phone.is_empty() && params.phone != user.phone {
            user.phone = params.phone;
            fields.push(UserField::Phone);
        }
        if fields.is_empty() {
            return Err(Error::NothingToUpdate);
        }

        user.updated_at = Utc::now();
        fields.push(UserField::UpdatedAt);
        let user = self.save(&user, &fields, "update profile").await?;

        info!(user_id = %user.id, actor = %actor.user_id, ?fields, "Profile updated");
        Ok(user)
    }

    async fn get_user_by_id(&self, actor: &TokenPayload, user_id: &str) -> Result<User> {
        self.find_scoped(actor, user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.find_by_email(email).await
    }

    async fn verify_account(&self, actor: &TokenPayload, user_id: &str) -> Result<User> {
        let user = self.find_scoped(actor, user_id).await?;
        if user.verified {
            return Ok(user);
        }

        let user = self.mark_verified(user).await?;
        info!(user_id = %user.id, actor = %actor.user_id, "Account verified");
        Ok(user)
    }
}
