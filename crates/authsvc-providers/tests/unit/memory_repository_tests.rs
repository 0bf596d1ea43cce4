//! Tests for the in-memory user repository

use authsvc_domain::entities::{User, UserField};
use authsvc_domain::error::Error;
use authsvc_domain::value_objects::Role;
use authsvc_providers::repository::InMemoryUserRepository;
use authsvc_providers::UserRepository;

fn student(email: &str) -> User {
    User::new(email, "$2b$04$hash", Role::Student)
}

#[tokio::test]
async fn create_then_lookup_by_email_and_id() {
    let repo = InMemoryUserRepository::new();
    let user = student("a@example.com");
    repo.create(&user).await.expect("create");

    let by_email = repo.get_by_email("a@example.com").await.expect("lookup");
    let by_id = repo.get_by_id(&user.id).await.expect("lookup");

    assert_eq!(by_email.as_ref(), Some(&user));
    assert_eq!(by_id, Some(user));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(&student("a@example.com")).await.expect("create");

    let err = repo.create(&student("a@example.com")).await.unwrap_err();

    assert!(matches!(err, Error::DuplicateKey { ref field } if field == "email"));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn absent_user_is_none() {
    let repo = InMemoryUserRepository::new();
    assert!(repo.get_by_id("missing").await.expect("lookup").is_none());
    assert!(repo.get_by_email("missing@example.com").await.expect("lookup").is_none());
}

#[tokio::test]
async fn update_writes_only_listed_fields() {
    let repo = InMemoryUserRepository::new();
    let user = student("a@example.com");
    repo.create(&user).await.expect("create");

    let mut changed = user.clone();
    changed.phone = "+1 555 0100".into();
    changed.username = "ignored".into();

    let saved = repo.update(&changed, &[UserField::Phone]).await.expect("update");

    assert_eq!(saved.phone, "+1 555 0100");
    assert_eq!(saved.username, "");
}

#[tokio::test]
async fn update_with_no_fields_is_nothing_to_update() {
    let repo = InMemoryUserRepository::new();
    let user = student("a@example.com");
    repo.create(&user).await.expect("create");

    let err = repo.update(&user, &[]).await.unwrap_err();
    assert!(matches!(err, Error::NothingToUpdate));
}

#[tokio::test]
async fn update_to_taken_email_is_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(&student("a@example.com")).await.expect("create");
    let mut other = student("b@example.com");
    repo.create(&other).await.expect("create");

    other.email = "a@example.com".into();
    let err = repo.update(&other, &[UserField::Email]).await.unwrap_err();

    assert!(matches!(err, Error::DuplicateKey { .. }));
}

#[tokio::test]
async fn update_of_absent_user_is_not_found() {
    let repo = InMemoryUserRepository::new();
    let err = repo
        .update(&student("ghost@example.com"), &[UserField::Verified])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_account() {
    let repo = InMemoryUserRepository::new();
    let user = student("a@example.com");
    repo.create(&user).await.expect("create");

    repo.delete(&user.id).await.expect("delete");
    repo.delete(&user.id).await.expect("delete again");

    assert!(repo.is_empty().await);
}
