//! Registration flow

use crate::support::{PASSWORD, harness};
use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::error::Error;
use authsvc_domain::value_objects::Role;

#[tokio::test]
async fn registers_unverified_user_with_hashed_password() {
    let h = harness().build();

    let user = h
        .service
        .register("a@x.com", PASSWORD, Role::Student)
        .await
        .expect("register");

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, Role::Student);
    assert!(!user.verified);
    assert_ne!(user.password_hash, PASSWORD);
    assert!(user.password_hash.starts_with("$2"));
    assert_eq!(h.stored(&user.id).await, user);
}

#[tokio::test]
async fn second_registration_with_same_email_is_rejected() {
    let h = harness().build();
    h.register("a@x.com", Role::Student).await;

    let err = h
        .service
        .register("a@x.com", "another password", Role::Teacher)
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::EmailAlreadyExists));
}

#[tokio::test]
async fn registration_publishes_event() {
    let h = harness().build();
    let user = h.register("a@x.com", Role::Teacher).await;

    let events = h.events.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id, user.id);
    assert_eq!(events[0].email, "a@x.com");
    assert_eq!(events[0].role, Role::Teacher);
}

#[tokio::test]
async fn publish_failure_is_tolerated_by_default() {
    let h = harness().failing_events().build();

    let user = h.register("a@x.com", Role::Student).await;

    assert_eq!(h.stored(&user.id).await.email, "a@x.com");
}

#[tokio::test]
async fn publish_failure_fails_registration_when_required() {
    use authsvc_domain::value_objects::PublishPolicy;

    let h = harness().failing_events().build();
    let service = h.service.with_publish_policy(PublishPolicy::Required);

    let err = service
        .register("a@x.com", PASSWORD, Role::Student)
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::Network { .. }));
    assert!(!err.is_domain());
}

#[tokio::test]
async fn invalid_input_is_rejected_before_hashing() {
    let h = harness().build();

    for (email, password, role) in [
        ("", PASSWORD, Role::Student),
        ("not-an-email", PASSWORD, Role::Student),
        ("a@x.com", "", Role::Student),
        ("a@x.com", PASSWORD, Role::Unspecified),
    ] {
        let err = h.service.register(email, password, role).await.unwrap_err();
        assert!(
            matches!(err.root(), Error::InvalidArgument { .. }),
            "{email:?}/{role:?} gave {err}"
        );
    }
    assert!(h.users.is_empty().await);
}

#[tokio::test]
async fn password_over_72_bytes_is_rejected() {
    let h = harness().build();
    let long = format!("{}CorrectSuffix", "a".repeat(72));

    let err = h
        .service
        .register("a@x.com", &long, Role::Student)
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::InvalidArgument { .. }));
    assert!(h.users.is_empty().await);
}
