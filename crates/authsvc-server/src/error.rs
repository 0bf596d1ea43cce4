//! Domain error to gRPC status mapping
//!
//! Matching always happens on [`Error::root`], so operation context added by
//! inner layers never hides the business error. Anything outside the
//! business taxonomy becomes a bare `Internal` status; the details only go
//! to the server log.

use authsvc_domain::error::Error;
use tonic::Status;
use tracing::error;

/// Convert a use case error into the status returned to the caller
pub fn to_status(err: &Error) -> Status {
    match err.root() {
        Error::EmailAlreadyExists => Status::already_exists("email already in use"),
        Error::UsernameAlreadyExists => Status::already_exists("username already in use"),
        Error::DuplicateKey { .. } => Status::already_exists("already exists"),

        Error::InvalidCredentials => Status::unauthenticated("invalid credentials"),
        Error::InvalidToken | Error::TokenExpired | Error::MissingClaim { .. } => {
            Status::unauthenticated("invalid token")
        }

        Error::UserNotFound => Status::not_found("user not found"),
        Error::NotFound { .. } => Status::not_found("not found"),

        Error::PermissionDenied => Status::permission_denied("permission denied"),

        root @ (Error::CodeNotFound
        | Error::CodeInvalid
        | Error::CodeExpired
        | Error::InvalidPurpose
        | Error::PasswordUnchanged
        | Error::NothingToUpdate
        | Error::InvalidArgument { .. }) => Status::invalid_argument(root.to_string()),

        _ => {
            error!(error = %err, "Request failed with an internal error");
            Status::internal("internal server error")
        }
    }
}

/// Like [`to_status`] but hides whether the account exists
///
/// Used by login, where "no such user" and "wrong password" must look the
/// same to the caller.
pub fn to_login_status(err: &Error) -> Status {
    match err.root() {
        Error::UserNotFound | Error::InvalidCredentials => {
            Status::unauthenticated("invalid email or password")
        }
        _ => to_status(err),
    }
}
