//! gRPC AuthService implementation
//!
//! Routes every generated RPC through the interceptor chain and into its
//! handler.

use std::future::Future;

use tonic::{Request, Response, Status};

use crate::handlers::{
    ChangePasswordHandler, ConfirmResetPasswordHandler, GetUserHandler, LoginHandler,
    RegisterHandler, ResetPasswordHandler, SendVerificationCodeHandler, UpdateProfileHandler,
    ValidateTokenHandler, VerifyAccountHandler,
};
use crate::interceptors::{AuthInterceptor, log_call, request_id};
use crate::methods;
use crate::proto;
use crate::proto::auth_service_server::{AuthService, AuthServiceServer};

/// Handlers of every RPC
pub(crate) struct Handlers {
    pub register: RegisterHandler,
    pub login: LoginHandler,
    pub validate_token: ValidateTokenHandler,
    pub send_verification_code: SendVerificationCodeHandler,
    pub verify_account: VerifyAccountHandler,
    pub reset_password: ResetPasswordHandler,
    pub confirm_reset_password: ConfirmResetPasswordHandler,
    pub get_user: GetUserHandler,
    pub update_profile: UpdateProfileHandler,
    pub change_password: ChangePasswordHandler,
}

/// The auth service as served over gRPC
pub struct AuthGrpcService {
    auth: AuthInterceptor,
    handlers: Handlers,
}

impl AuthGrpcService {
    pub(crate) fn new(auth: AuthInterceptor, handlers: Handlers) -> Self {
        Self { auth, handlers }
    }

    /// Wrap into the generated tonic server
    pub fn into_server(self) -> AuthServiceServer<Self> {
        AuthServiceServer::new(self)
    }

    /// logging -> auth -> handler
    async fn dispatch<Req, Res, F, Fut>(
        &self,
        method: &'static str,
        mut request: Request<Req>,
        handler: F,
    ) -> Result<Response<Res>, Status>
    where
        F: FnOnce(Request<Req>) -> Fut,
        Fut: Future<Output = Result<Response<Res>, Status>>,
    {
        let request_id = request_id(&request);
        log_call(method, &request_id, async move {
            self.auth.authorize(method, &mut request)?;
            handler(request).await
        })
        .await
    }
}

#[tonic::async_trait]
impl AuthService for AuthGrpcService {
    async fn register(
        &self,
        request: Request<proto::RegisterRequest>,
    ) -> Result<Response<proto::RegisterResponse>, Status> {
        self.dispatch(methods::REGISTER, request, |r| self.handlers.register.handle(r))
            .await
    }

    async fn login(
        &self,
        request: Request<proto::LoginRequest>,
    ) -> Result<Response<proto::LoginResponse>, Status> {
        self.dispatch(methods::LOGIN, request, |r| self.handlers.login.handle(r))
            .await
    }

    async fn validate_token(
        &self,
        request: Request<proto::ValidateTokenRequest>,
    ) -> Result<Response<proto::ValidateTokenResponse>, Status> {
        self.dispatch(methods::VALIDATE_TOKEN, request, |r| {
            self.handlers.validate_token.handle(r)
        })
        .await
    }

    async fn send_verification_code(
        &self,
        request: Request<proto::VerificationCodeRequest>,
    ) -> Result<Response<proto::VerificationCodeResponse>, Status> {
        self.dispatch(methods::SEND_VERIFICATION_CODE, request, |r| {
            self.handlers.send_verification_code.handle(r)
        })
        .await
    }

    async fn verify_account(
        &self,
        request: Request<proto::VerifyAccountRequest>,
    ) -> Result<Response<proto::VerifyAccountResponse>, Status> {
        self.dispatch(methods::VERIFY_ACCOUNT, request, |r| {
            self.handlers.verify_account.handle(r)
        })
        .await
    }

    async fn reset_password(
        &self,
        request: Request<proto::ResetPasswordRequest>,
    ) -> Result<Response<proto::ResetPasswordResponse>, Status> {
        self.dispatch(methods::RESET_PASSWORD, request, |r| {
            self.handlers.reset_password.handle(r)
        })
        .await
    }

    async fn confirm_reset_password(
        &self,
        request: Request<proto::ConfirmResetRequest>,
    ) -> Result<Response<proto::ConfirmResetResponse>, Status> {
        self.dispatch(methods::CONFIRM_RESET_PASSWORD, request, |r| {
            self.handlers.confirm_reset_password.handle(r)
        })
        .await
    }

    async fn get_user_by_id(
        &self,
        request: Request<proto::GetUserRequest>,
    ) -> Result<Response<proto::GetUserResponse>, Status> {
        self.dispatch(methods::GET_USER_BY_ID, request, |r| {
            self.handlers.get_user.handle(r)
        })
        .await
    }

    async fn update_user_profile(
        &self,
        request: Request<proto::UpdateUserRequest>,
    ) -> Result<Response<proto::UpdateUserResponse>, Status> {
        self.dispatch(methods::UPDATE_USER_PROFILE, request, |r| {
            self.handlers.update_profile.handle(r)
        })
        .await
    }

    async fn change_password(
        &self,
        request: Request<proto::ChangePasswordRequest>,
    ) -> Result<Response<proto::ChangePasswordResponse>, Status> {
        self.dispatch(methods::CHANGE_PASSWORD, request, |r| {
            self.handlers.change_password.handle(r)
        })
        .await
    }
}
