//! Tests for password hashing

use authsvc_domain::error::Error;
use authsvc_domain::ports::PasswordHasher;
use authsvc_infrastructure::PasswordService;

fn fast_bcrypt() -> PasswordService {
    PasswordService::bcrypt(4)
}

#[tokio::test]
async fn test_hash_then_verify() {
    let hasher = fast_bcrypt();
    let hash = hasher.hash("s3cret-pw").await.expect("hash");

    assert_ne!(hash, "s3cret-pw");
    assert!(hasher.verify(&hash, "s3cret-pw").await);
    assert!(!hasher.verify(&hash, "s3cret-pW").await);
}

#[tokio::test]
async fn test_same_input_yields_distinct_hashes() {
    let hasher = fast_bcrypt();
    let first = hasher.hash("pw").await.unwrap();
    let second = hasher.hash("pw").await.unwrap();

    assert_ne!(first, second, "salt must differ per call");
    assert!(hasher.verify(&first, "pw").await);
    assert!(hasher.verify(&second, "pw").await);
}

#[tokio::test]
async fn test_malformed_hash_is_a_mismatch() {
    let hasher = fast_bcrypt();
    assert!(!hasher.verify("not-a-hash", "pw").await);
    assert!(!hasher.verify("$argon2id$garbage", "pw").await);
    assert!(!hasher.verify("", "").await);
}

#[tokio::test]
async fn test_invalid_cost_is_an_error() {
    let hasher = PasswordService::bcrypt(2);
    assert!(hasher.hash("pw").await.is_err());
}

#[tokio::test]
async fn test_argon2_hashes_verify_with_any_configuration() {
    let argon = PasswordService::argon2();
    let hash = argon.hash("pw").await.unwrap();
    assert!(hash.starts_with("$argon2"));

    // Verification is keyed on the hash format, not on the configured algorithm
    assert!(fast_bcrypt().verify(&hash, "pw").await);
    assert!(!fast_bcrypt().verify(&hash, "other").await);
}

#[tokio::test]
async fn test_bcrypt_distinguishes_passwords_past_byte_72() {
    let hasher = fast_bcrypt();
    let prefix = "a".repeat(72);
    let hash = hasher.hash(&prefix).await.unwrap();

    assert!(hasher.verify(&hash, &prefix).await);
    assert!(!hasher.verify(&hash, &format!("{prefix}WRONG")).await);
}

#[tokio::test]
async fn test_bcrypt_refuses_passwords_over_72_bytes() {
    let hasher = fast_bcrypt();
    let err = hasher
        .hash(&format!("{}CorrectSuffix", "a".repeat(72)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_argon2_accepts_long_passwords() {
    let argon = PasswordService::argon2();
    let long = format!("{}CorrectSuffix", "a".repeat(72));
    let hash = argon.hash(&long).await.unwrap();

    assert!(argon.verify(&hash, &long).await);
    assert!(!argon.verify(&hash, &format!("{}WRONG", "a".repeat(72))).await);
}
