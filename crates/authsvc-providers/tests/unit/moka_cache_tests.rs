//! Tests for the in-process verification code cache

use authsvc_domain::value_objects::{CodeLookup, CodePurpose, VerificationCode};
use authsvc_providers::cache::MokaCodeCache;
use authsvc_providers::CodeCache;
use std::time::Duration;

fn code(user_id: &str, value: &str, ttl: Duration) -> VerificationCode {
    VerificationCode::new(user_id, value, CodePurpose::EmailVerification, ttl)
}

#[tokio::test]
async fn get_returns_stored_code() {
    let cache = MokaCodeCache::new();
    let stored = code("u1", "123456", Duration::from_secs(60));

    cache.set(&stored).await.expect("set");

    assert_eq!(cache.get("u1").await.expect("get"), CodeLookup::Found(stored));
}

#[tokio::test]
async fn absent_user_is_a_miss() {
    let cache = MokaCodeCache::new();
    assert_eq!(cache.get("nobody").await.expect("get"), CodeLookup::Miss);
}

#[tokio::test]
async fn newer_code_replaces_older_one() {
    let cache = MokaCodeCache::new();
    cache.set(&code("u1", "111111", Duration::from_secs(60))).await.expect("set");
    cache.set(&code("u1", "222222", Duration::from_secs(60))).await.expect("set");

    let found = cache.get("u1").await.expect("get").into_option().expect("present");
    assert_eq!(found.code, "222222");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let cache = MokaCodeCache::new();
    cache.set(&code("u1", "123456", Duration::from_secs(60))).await.expect("set");

    cache.delete("u1").await.expect("first delete");
    cache.delete("u1").await.expect("second delete");

    assert_eq!(cache.get("u1").await.expect("get"), CodeLookup::Miss);
}

#[tokio::test]
async fn entry_is_evicted_after_ttl() {
    let cache = MokaCodeCache::new();
    cache.set(&code("u1", "123456", Duration::from_millis(50))).await.expect("set");

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(cache.get("u1").await.expect("get"), CodeLookup::Miss);
}

#[test]
fn provider_name_is_moka() {
    assert_eq!(MokaCodeCache::new().provider_name(), "moka");
}
