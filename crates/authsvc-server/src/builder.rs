//! Auth Service Builder
//!
//! Assembles the gRPC service from the user service and the token service.
//! Ensures all required dependencies are provided before construction.

use std::sync::Arc;

use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::ports::TokenService;

use crate::handlers::{
    ChangePasswordHandler, ConfirmResetPasswordHandler, GetUserHandler, LoginHandler,
    RegisterHandler, ResetPasswordHandler, SendVerificationCodeHandler, UpdateProfileHandler,
    ValidateTokenHandler, VerifyAccountHandler,
};
use crate::interceptors::AuthInterceptor;
use crate::service::{AuthGrpcService, Handlers};

/// Builder for [`AuthGrpcService`]
#[derive(Default)]
pub struct AuthServiceBuilder {
    user_service: Option<Arc<dyn UserServiceInterface>>,
    token_service: Option<Arc<dyn TokenService>>,
    interceptor: Option<AuthInterceptor>,
}

impl AuthServiceBuilder {
    /// Create a new service builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user service
    #[must_use]
    pub fn with_user_service(mut self, service: Arc<dyn UserServiceInterface>) -> Self {
        self.user_service = Some(service);
        self
    }

    /// Set the token service used by the default interceptor
    #[must_use]
    pub fn with_token_service(mut self, service: Arc<dyn TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Use an interceptor with custom rules instead of the default one
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: AuthInterceptor) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Build the service
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the user service, or both
    /// the interceptor and the token service, are missing
    pub fn build(self) -> Result<AuthGrpcService, BuilderError> {
        let users = self
            .user_service
            .ok_or(BuilderError::MissingDependency("user service"))?;
        let auth = match (self.interceptor, self.token_service) {
            (Some(interceptor), _) => interceptor,
            (None, Some(tokens)) => AuthInterceptor::new(tokens),
            (None, None) => return Err(BuilderError::MissingDependency("token service")),
        };

        let handlers = Handlers {
            register: RegisterHandler::new(Arc::clone(&users)),
            login: LoginHandler::new(Arc::clone(&users)),
            validate_token: ValidateTokenHandler::new(Arc::clone(&users)),
            send_verification_code: SendVerificationCodeHandler::new(Arc::clone(&users)),
            verify_account: VerifyAccountHandler::new(Arc::clone(&users)),
            reset_password: ResetPasswordHandler::new(Arc::clone(&users)),
            confirm_reset_password: ConfirmResetPasswordHandler::new(Arc::clone(&users)),
            get_user: GetUserHandler::new(Arc::clone(&users)),
            update_profile: UpdateProfileHandler::new(Arc::clone(&users)),
            change_password: ChangePasswordHandler::new(users),
        };

        Ok(AuthGrpcService::new(auth, handlers))
    }
}

/// Errors that can occur during service building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
