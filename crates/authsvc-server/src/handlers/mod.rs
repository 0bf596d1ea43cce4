//! RPC Handlers
//!
//! Each handler turns one protobuf request into validated arguments, calls
//! the user service and maps the outcome back to a protobuf response or a
//! status.

pub mod change_password;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_profile;
pub mod validate_token;
pub mod verification;

pub use change_password::ChangePasswordHandler;
pub use get_user::GetUserHandler;
pub use login::LoginHandler;
pub use register::RegisterHandler;
pub use update_profile::UpdateProfileHandler;
pub use validate_token::ValidateTokenHandler;
pub use verification::{
    ConfirmResetPasswordHandler, ResetPasswordHandler, SendVerificationCodeHandler,
    VerifyAccountHandler,
};
