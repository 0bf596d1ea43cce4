//! Tests for figment configuration loading
//!
//! `figment::Jail` isolates environment variables and the working
//! directory, so these run in parallel with the rest of the suite.

use authsvc_infrastructure::ConfigLoader;
use authsvc_infrastructure::config::{
    CacheProvider, EmailProvider, EventBusProvider, PasswordAlgorithm, PublishPolicy,
};
use figment::Jail;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

#[test]
fn test_defaults_with_secret_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("AUTHSVC__AUTH__JWT__SECRET", SECRET);

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 50051);
        assert_eq!(config.auth.jwt.secret, SECRET);
        assert_eq!(config.auth.jwt.expiration_secs, 86_400);
        assert_eq!(config.auth.verification.code_ttl_secs, 300);
        assert_eq!(config.auth.password.algorithm, PasswordAlgorithm::Bcrypt);
        assert_eq!(config.auth.registration.publish_policy, PublishPolicy::BestEffort);
        assert_eq!(config.cache.provider, CacheProvider::Moka);
        assert_eq!(config.event_bus.provider, EventBusProvider::Null);
        assert_eq!(config.event_bus.user_registered_subject, "user.registered");
        assert_eq!(config.email.provider, EmailProvider::Log);
        Ok(())
    });
}

#[test]
fn test_missing_secret_fails_fast() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("JWT secret"));
        Ok(())
    });
}

#[test]
fn test_short_secret_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("AUTHSVC__AUTH__JWT__SECRET", "too-short");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_toml_file_then_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "authsvc.toml",
            r#"
            [server]
            port = 6000

            [auth.jwt]
            secret = "0123456789abcdef0123456789abcdef"
            expiration_secs = 900

            [cache]
            provider = "redis"
            redis_url = "redis://cache:6379/1"

            [auth.registration]
            publish_policy = "required"
            "#,
        )?;
        jail.set_env("AUTHSVC__SERVER__PORT", "7000");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 7000, "env overrides file");
        assert_eq!(config.auth.jwt.expiration_secs, 900);
        assert_eq!(config.cache.provider, CacheProvider::Redis);
        assert_eq!(config.cache.redis_url, "redis://cache:6379/1");
        assert_eq!(config.auth.registration.publish_policy, PublishPolicy::Required);
        Ok(())
    });
}

#[test]
fn test_explicit_path_and_invalid_cost() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [auth.jwt]
            secret = "0123456789abcdef0123456789abcdef"

            [auth.password]
            bcrypt_cost = 40
            "#,
        )?;

        let err = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("bcrypt cost"));
        Ok(())
    });
}

#[test]
fn test_save_then_reload() {
    Jail::expect_with(|jail| {
        jail.set_env("AUTHSVC__AUTH__JWT__SECRET", SECRET);
        let loader = ConfigLoader::new();
        let mut config = loader.load().map_err(|e| e.to_string())?;
        config.server.port = 6100;

        let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
        let path = dir.path().join("saved.toml");
        loader
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;

        let reloaded = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(reloaded.server.port, 6100);
        Ok(())
    });
}
