//! Tests for domain events

use authsvc_domain::{Role, User, UserRegisteredEvent};

#[test]
fn test_registered_event_mirrors_user() {
    let user = User::new("a@x.com", "$2b$04$hash", Role::Student);
    let event = UserRegisteredEvent::from(&user);

    assert_eq!(event.user_id, user.id);
    assert_eq!(event.email, "a@x.com");
    assert_eq!(event.role, Role::Student);
    assert_eq!(event.created_at, user.created_at);
}

#[test]
fn test_registered_event_json_shape() {
    let user = User::new("a@x.com", "hash", Role::Teacher);
    let json = serde_json::to_value(UserRegisteredEvent::from(&user)).unwrap();

    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["role"], "teacher");
    assert!(json.get("user_id").is_some());
    assert!(json.get("created_at").is_some());
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_new_user_is_unverified_with_unique_id() {
    let a = User::new("a@x.com", "h", Role::Student);
    let b = User::new("a@x.com", "h", Role::Student);
    assert!(!a.verified);
    assert_ne!(a.id, b.id);
}
