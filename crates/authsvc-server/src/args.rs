//! Validated RPC arguments
//!
//! Each protected or public RPC converts its protobuf request into one of
//! these structs and calls `validate()` before touching the use cases.

use crate::convert::role_from_proto;
use crate::proto;
use authsvc_domain::constants::MAX_PASSWORD_BYTES;
use authsvc_domain::value_objects::Role;
use tonic::Status;
use validator::{Validate, ValidationError, ValidationErrors};

/// Arguments for Register
#[derive(Debug, Validate)]
pub struct RegisterArgs {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_password_size", message = "Password must be 1 to 72 bytes"))]
    pub password: String,
    #[validate(custom(function = "validate_role_specified", message = "Role must be specified"))]
    pub role: Role,
}

/// Arguments for Login
#[derive(Debug, Validate)]
pub struct LoginArgs {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Arguments for ValidateToken
#[derive(Debug, Validate)]
pub struct ValidateTokenArgs {
    #[validate(length(min = 1, message = "Token cannot be empty"))]
    pub jwt: String,
}

/// Arguments for SendVerificationCode and ResetPassword
#[derive(Debug, Validate)]
pub struct EmailArgs {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Arguments for VerifyAccount
#[derive(Debug, Validate)]
pub struct VerifyCodeArgs {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_code_format", message = "Code must be 6 digits"))]
    pub code: String,
}

/// Arguments for ConfirmResetPassword
#[derive(Debug, Validate)]
pub struct ConfirmResetArgs {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_code_format", message = "Code must be 6 digits"))]
    pub code: String,
    #[validate(custom(function = "validate_password_size", message = "Password must be 1 to 72 bytes"))]
    pub new_password: String,
}

/// Arguments for GetUserByID
#[derive(Debug, Validate)]
pub struct UserIdArgs {
    #[validate(length(min = 1, message = "User id cannot be empty"))]
    pub user_id: String,
}

/// Arguments for UpdateUserProfile; `None` leaves a field unchanged
#[derive(Debug, Validate)]
pub struct UpdateProfileArgs {
    #[validate(length(min = 1, message = "User id cannot be empty"))]
    pub user_id: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// Arguments for ChangePassword
#[derive(Debug, Validate)]
pub struct ChangePasswordArgs {
    #[validate(length(min = 1, message = "User id cannot be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Old password cannot be empty"))]
    pub old_password: String,
    #[validate(custom(function = "validate_password_size", message = "Password must be 1 to 72 bytes"))]
    pub new_password: String,
}

impl TryFrom<proto::RegisterRequest> for RegisterArgs {
    type Error = Status;

    fn try_from(req: proto::RegisterRequest) -> Result<Self, Status> {
        Ok(Self {
            email: req.email.trim().to_string(),
            password: req.password,
            role: role_from_proto(req.role)?,
        })
    }
}

impl From<proto::LoginRequest> for LoginArgs {
    fn from(req: proto::LoginRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
            password: req.password,
        }
    }
}

impl From<proto::ValidateTokenRequest> for ValidateTokenArgs {
    fn from(req: proto::ValidateTokenRequest) -> Self {
        Self {
            jwt: req.jwt.trim().to_string(),
        }
    }
}

impl From<proto::VerificationCodeRequest> for EmailArgs {
    fn from(req: proto::VerificationCodeRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
        }
    }
}

impl From<proto::ResetPasswordRequest> for EmailArgs {
    fn from(req: proto::ResetPasswordRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
        }
    }
}

impl From<proto::VerifyAccountRequest> for VerifyCodeArgs {
    fn from(req: proto::VerifyAccountRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
            code: req.code.trim().to_string(),
        }
    }
}

impl From<proto::ConfirmResetRequest> for ConfirmResetArgs {
    fn from(req: proto::ConfirmResetRequest) -> Self {
        Self {
            email: req.email.trim().to_string(),
            code: req.code.trim().to_string(),
            new_password: req.new_password,
        }
    }
}

impl From<proto::GetUserRequest> for UserIdArgs {
    fn from(req: proto::GetUserRequest) -> Self {
        Self {
            user_id: req.user_id.trim().to_string(),
        }
    }
}

impl From<proto::UpdateUserRequest> for UpdateProfileArgs {
    fn from(req: proto::UpdateUserRequest) -> Self {
        Self {
            user_id: req.user_id.trim().to_string(),
            email: non_empty(req.email),
            username: non_empty(req.username),
            phone: non_empty(req.phone),
        }
    }
}

impl From<proto::ChangePasswordRequest> for ChangePasswordArgs {
    fn from(req: proto::ChangePasswordRequest) -> Self {
        Self {
            user_id: req.user_id.trim().to_string(),
            old_password: req.old_password,
            new_password: req.new_password,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate `args`, turning failures into `InvalidArgument`
pub fn validated<A: Validate>(args: A) -> Result<A, Status> {
    args.validate().map_err(|e| validation_status(&e))?;
    Ok(args)
}

fn validation_status(errors: &ValidationErrors) -> Status {
    Status::invalid_argument(format!("Invalid arguments: {errors}"))
}

// Custom validation functions

fn validate_role_specified(role: &Role) -> Result<(), ValidationError> {
    if *role == Role::Unspecified {
        return Err(ValidationError::new("role_unspecified"));
    }
    Ok(())
}

// Bytes, not characters: bcrypt reads at most this many
fn validate_password_size(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_size"));
    }
    Ok(())
}

fn validate_code_format(code: &str) -> Result<(), ValidationError> {
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new("code_format"));
    }
    Ok(())
}
