//! Unit tests for domain error types

use authsvc_domain::Error;
use authsvc_domain::error::{OperationExt, Result};

#[test]
fn test_root_unwraps_nested_operations() {
    let error = Error::UserNotFound
        .in_operation("get user by email")
        .in_operation("send verification code");

    assert!(matches!(error.root(), Error::UserNotFound));
    assert!(error.is_domain());
    assert_eq!(
        error.to_string(),
        "send verification code: get user by email: user not found"
    );
}

#[test]
fn test_infrastructure_errors_are_not_domain() {
    let error = Error::cache("connection reset").in_operation("set code");
    assert!(!error.is_domain());
    assert!(matches!(error.root(), Error::Cache { .. }));
}

#[test]
fn test_operation_ext_wraps_only_errors() {
    let ok: Result<u8> = Ok(7);
    assert_eq!(ok.in_operation("noop").unwrap(), 7);

    let failed: Result<u8> = Err(Error::CodeExpired);
    let err = failed.in_operation("verify code").unwrap_err();
    match err {
        Error::Operation { operation, source } => {
            assert_eq!(operation, "verify code");
            assert!(matches!(*source, Error::CodeExpired));
        }
        _ => panic!("Expected Operation error"),
    }
}

#[test]
fn test_source_chain_is_exposed() {
    let io = std::io::Error::other("refused");
    let error = Error::network_with_source("nats publish", io);
    let source = std::error::Error::source(&error).expect("source preserved");
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn test_constructor_helpers() {
    match Error::duplicate_key("email") {
        Error::DuplicateKey { field } => assert_eq!(field, "email"),
        _ => panic!("Expected DuplicateKey error"),
    }
    match Error::not_found("user u1") {
        Error::NotFound { resource } => assert_eq!(resource, "user u1"),
        _ => panic!("Expected NotFound error"),
    }
}
