//! Login and token validation

use crate::support::{PASSWORD, harness};
use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::error::Error;
use authsvc_domain::value_objects::Role;

#[tokio::test]
async fn login_issues_token_for_registered_user() {
    let h = harness().build();
    let user = h.register("a@x.com", Role::Teacher).await;

    let (issued, payload) = h.service.login("a@x.com", PASSWORD).await.expect("login");

    assert!(!issued.token.is_empty());
    assert_eq!(payload.user_id, user.id);
    assert_eq!(payload.email, "a@x.com");
    assert_eq!(payload.role, Role::Teacher);
    assert_eq!(payload.expires_at, issued.expires_at);
    assert!(issued.expires_at > issued.issued_at.timestamp());
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let h = harness().build();
    h.register("a@x.com", Role::Student).await;

    let result = h.service.login("a@x.com", "wrong password").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn unknown_email_is_user_not_found() {
    let h = harness().build();

    let err = h.service.login("ghost@x.com", PASSWORD).await.unwrap_err();

    assert!(matches!(err.root(), Error::UserNotFound));
}

#[tokio::test]
async fn issued_token_validates_to_same_identity() {
    let h = harness().build();
    let user = h.register("a@x.com", Role::Admin).await;
    let (issued, _) = h.service.login("a@x.com", PASSWORD).await.expect("login");

    let payload = h.service.validate_token(&issued.token).await.expect("validate");

    assert_eq!(payload.user_id, user.id);
    assert_eq!(payload.role, Role::Admin);
}

#[tokio::test]
async fn garbage_token_keeps_domain_error_through_wrapping() {
    let h = harness().build();

    let err = h.service.validate_token("not.a.token").await.unwrap_err();

    assert!(matches!(err, Error::Operation { .. }));
    assert!(matches!(err.root(), Error::InvalidToken));
}
