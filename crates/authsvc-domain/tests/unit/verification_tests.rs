//! Tests for verification code value objects

use authsvc_domain::{CodeLookup, CodePurpose, Error, VerificationCode};
use chrono::{Duration as ChronoDuration, Utc};
use std::time::Duration;

fn issue(code: &str, purpose: CodePurpose, ttl_secs: u64) -> VerificationCode {
    VerificationCode::new("u1", code, purpose, Duration::from_secs(ttl_secs))
}

#[test]
fn test_new_code_expires_after_ttl() {
    let before = Utc::now();
    let code = issue("042042", CodePurpose::EmailVerification, 300);
    let after = Utc::now();

    assert!(code.expires_at >= before + ChronoDuration::seconds(300));
    assert!(code.expires_at <= after + ChronoDuration::seconds(300));
    assert!(!code.is_expired_at(after));
    assert!(code.is_expired_at(after + ChronoDuration::seconds(301)));
}

#[test]
fn test_remaining_ttl_is_none_once_expired() {
    let code = issue("000001", CodePurpose::ResetPassword, 60);
    let now = Utc::now();

    let remaining = code.remaining_ttl(now).expect("fresh code has time left");
    assert!(remaining <= Duration::from_secs(60));
    assert!(code.remaining_ttl(now + ChronoDuration::seconds(61)).is_none());
}

#[test]
fn test_purpose_round_trips_through_wire_name() {
    for purpose in [CodePurpose::EmailVerification, CodePurpose::ResetPassword] {
        assert_eq!(purpose.as_str().parse::<CodePurpose>().unwrap(), purpose);
    }
}

#[test]
fn test_unknown_purpose_is_invalid_purpose() {
    let err = "change_email".parse::<CodePurpose>().unwrap_err();
    assert!(matches!(err, Error::InvalidPurpose));
}

#[test]
fn test_code_serializes_purpose_as_snake_case() {
    let code = issue("123456", CodePurpose::ResetPassword, 5);
    let json = serde_json::to_value(&code).unwrap();
    assert_eq!(json["purpose"], "reset_password");
    assert_eq!(json["user_id"], "u1");

    let back: VerificationCode = serde_json::from_value(json).unwrap();
    assert_eq!(back, code);
}

#[test]
fn test_lookup_from_option() {
    assert_eq!(CodeLookup::from(None), CodeLookup::Miss);
    let code = issue("123456", CodePurpose::ResetPassword, 5);
    assert_eq!(CodeLookup::from(Some(code.clone())).into_option(), Some(code));
}
