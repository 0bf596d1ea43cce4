//! Verification Code Handlers
//!
//! SendVerificationCode / VerifyAccount confirm an email address;
//! ResetPassword / ConfirmResetPassword replace a forgotten password.

use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::value_objects::CodePurpose;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{ConfirmResetArgs, EmailArgs, VerifyCodeArgs, validated};
use crate::error::to_status;
use crate::proto;

/// Handler issuing email verification codes
pub struct SendVerificationCodeHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl SendVerificationCodeHandler {
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        request: Request<proto::VerificationCodeRequest>,
    ) -> Result<Response<proto::VerificationCodeResponse>, Status> {
        let args = validated(EmailArgs::from(request.into_inner()))?;

        self.users
            .send_verification_code(&args.email, CodePurpose::EmailVerification)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::VerificationCodeResponse {
            success: true,
            message: "verification code sent".to_string(),
        }))
    }
}

/// Handler confirming an email address with a code
pub struct VerifyAccountHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl VerifyAccountHandler {
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        request: Request<proto::VerifyAccountRequest>,
    ) -> Result<Response<proto::VerifyAccountResponse>, Status> {
        let args = validated(VerifyCodeArgs::from(request.into_inner()))?;

        self.users
            .verify_code(&args.email, &args.code, CodePurpose::EmailVerification)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::VerifyAccountResponse {
            success: true,
            message: "account verified".to_string(),
        }))
    }
}

/// Handler issuing password reset codes
pub struct ResetPasswordHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl ResetPasswordHandler {
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        request: Request<proto::ResetPasswordRequest>,
    ) -> Result<Response<proto::ResetPasswordResponse>, Status> {
        let args = validated(EmailArgs::from(request.into_inner()))?;

        self.users
            .send_verification_code(&args.email, CodePurpose::ResetPassword)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::ResetPasswordResponse {
            success: true,
            message: "reset code sent".to_string(),
        }))
    }
}

/// Handler setting a new password with a reset code
pub struct ConfirmResetPasswordHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl ConfirmResetPasswordHandler {
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        request: Request<proto::ConfirmResetRequest>,
    ) -> Result<Response<proto::ConfirmResetResponse>, Status> {
        let args = validated(ConfirmResetArgs::from(request.into_inner()))?;

        self.users
            .confirm_password_reset(&args.email, &args.code, &args.new_password)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::ConfirmResetResponse {
            success: true,
            message: "password reset".to_string(),
        }))
    }
}
