//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//! 1. `AppConfig::default()`
//! 2. TOML file (explicit path, or the first default location that exists)
//! 3. Environment variables prefixed `AUTHSVC__`, nested with `__`
//!    (e.g. `AUTHSVC__AUTH__JWT__SECRET`)

use crate::config::{AppConfig, CacheProvider, EmailProvider};
use crate::constants::{
    BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, JWT_MIN_SECRET_LEN,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use authsvc_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Merged provider chain, exposed for callers that extract sub-sections
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        let path = path.as_ref();
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first default configuration file that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(current_dir.join("config").join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(config)?;
    validate_cache_config(config)?;
    validate_email_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let auth = &config.auth;
    if auth.jwt.secret.is_empty() {
        return Err(Error::config(
            "JWT secret cannot be empty; set AUTHSVC__AUTH__JWT__SECRET",
        ));
    }
    if !auth.jwt.has_usable_secret() {
        return Err(Error::config(format!(
            "JWT secret should be at least {JWT_MIN_SECRET_LEN} characters long"
        )));
    }
    if auth.jwt.expiration_secs == 0 {
        return Err(Error::config("JWT expiration cannot be 0"));
    }
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&auth.password.bcrypt_cost) {
        return Err(Error::config(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}"
        )));
    }
    if auth.verification.code_ttl_secs == 0 {
        return Err(Error::config("Verification code TTL cannot be 0"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    match config.cache.provider {
        CacheProvider::Redis if config.cache.redis_url.is_empty() => {
            Err(Error::config("Redis URL is required for the redis cache provider"))
        }
        CacheProvider::Moka if config.cache.max_capacity == 0 => {
            Err(Error::config("Cache capacity cannot be 0"))
        }
        _ => Ok(()),
    }
}

fn validate_email_config(config: &AppConfig) -> Result<()> {
    if config.email.provider == EmailProvider::Smtp && config.email.smtp_host.is_empty() {
        return Err(Error::config("SMTP host is required for the smtp email provider"));
    }
    Ok(())
}
