//! Domain error to status mapping

use authsvc_domain::error::Error;
use authsvc_server::error::{to_login_status, to_status};
use tonic::Code;

#[test]
fn business_errors_map_to_their_status_codes() {
    let cases = [
        (Error::EmailAlreadyExists, Code::AlreadyExists),
        (Error::UsernameAlreadyExists, Code::AlreadyExists),
        (Error::InvalidCredentials, Code::Unauthenticated),
        (Error::InvalidToken, Code::Unauthenticated),
        (Error::UserNotFound, Code::NotFound),
        (Error::PermissionDenied, Code::PermissionDenied),
        (Error::CodeNotFound, Code::InvalidArgument),
        (Error::CodeInvalid, Code::InvalidArgument),
        (Error::CodeExpired, Code::InvalidArgument),
        (Error::InvalidPurpose, Code::InvalidArgument),
        (Error::PasswordUnchanged, Code::InvalidArgument),
        (Error::NothingToUpdate, Code::InvalidArgument),
        (Error::invalid_argument("bad"), Code::InvalidArgument),
    ];

    for (err, code) in cases {
        assert_eq!(to_status(&err).code(), code, "{err}");
    }
}

#[test]
fn token_failures_are_indistinguishable() {
    let statuses = [
        to_status(&Error::InvalidToken),
        to_status(&Error::TokenExpired),
        to_status(&Error::MissingClaim { claim: "exp" }),
    ];

    for status in &statuses {
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "invalid token");
    }
}

#[test]
fn code_failures_stay_distinguishable() {
    let invalid = to_status(&Error::CodeInvalid);
    let expired = to_status(&Error::CodeExpired);
    let purpose = to_status(&Error::InvalidPurpose);

    assert_ne!(invalid.message(), expired.message());
    assert_ne!(expired.message(), purpose.message());
}

#[test]
fn wrapped_errors_map_by_root() {
    let err = Error::EmailAlreadyExists
        .in_operation("create user")
        .in_operation("register");

    assert_eq!(to_status(&err).code(), Code::AlreadyExists);
}

#[test]
fn infrastructure_errors_do_not_leak_details() {
    let err = Error::network("connection refused by 10.0.0.7:6379").in_operation("store code");

    let status = to_status(&err);

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal server error");
}

#[test]
fn login_hides_account_existence() {
    let missing = to_login_status(&Error::UserNotFound.in_operation("find user by email"));
    let wrong = to_login_status(&Error::InvalidCredentials);

    assert_eq!(missing.code(), Code::Unauthenticated);
    assert_eq!(missing.message(), wrong.message());
}
