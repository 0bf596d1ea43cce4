//! Server Initialization
//!
//! Loads configuration, sets up logging, builds the adapters selected by
//! configuration, wires the user service and serves gRPC until Ctrl-C.
//!
//! # Configuration
//!
//! Providers are picked per section:
//! - `cache.provider`: `moka` (in-process) or `redis`
//! - `event_bus.provider`: `null` or `nats`
//! - `email.provider`: `log` or `smtp`

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use authsvc_application::ports::UserServiceInterface;
use authsvc_application::use_cases::{UserServiceDeps, UserServiceImpl};
use authsvc_domain::ports::{CodeCache, EmailSender, TokenService, UserEventPublisher};
use authsvc_infrastructure::config::{
    AppConfig, CacheConfig, CacheProvider, ConfigLoader, EmailConfig, EmailProvider,
    EventBusConfig, EventBusProvider, ServerConfig,
};
use authsvc_infrastructure::crypto::{JwtTokenService, PasswordService};
use authsvc_infrastructure::logging::init_logging;
use authsvc_providers::cache::{MokaCodeCache, RedisCodeCache};
use authsvc_providers::email::{LogEmailSender, SmtpEmailSender, SmtpSettings};
use authsvc_providers::events::{NatsUserEventPublisher, NullUserEventPublisher};
use authsvc_providers::repository::InMemoryUserRepository;
use tonic::transport::Server;
use tracing::{error, info, warn};

use crate::builder::AuthServiceBuilder;
use crate::service::AuthGrpcService;

/// Run the auth service
///
/// This is the main entry point that initializes all components and serves
/// until a shutdown signal arrives.
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        address = %config.server.bind_address(),
        cache = ?config.cache.provider,
        event_bus = ?config.event_bus.provider,
        email = ?config.email.provider,
        "Starting auth service"
    );

    let service = create_service(&config).await?;
    serve(service, &config.server).await
}

/// Write the built-in defaults as a TOML template to `path`
///
/// Refuses to overwrite an existing file. The template carries an empty JWT
/// secret, which must be filled in before the service will start.
pub fn write_default_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    ConfigLoader::new().save_to_file(&AppConfig::default(), path)?;
    info!(path = %path.display(), "Default configuration written");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Build the gRPC service with all adapters from configuration
pub async fn create_service(config: &AppConfig) -> anyhow::Result<AuthGrpcService> {
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_config(&config.auth.jwt));
    let users = create_user_service(config, Arc::clone(&tokens)).await?;

    Ok(AuthServiceBuilder::new()
        .with_user_service(users)
        .with_token_service(tokens)
        .build()?)
}

async fn create_user_service(
    config: &AppConfig,
    tokens: Arc<dyn TokenService>,
) -> anyhow::Result<Arc<dyn UserServiceInterface>> {
    let password = &config.auth.password;

    // TODO: swap for a database-backed repository once one exists
    warn!("Using the in-memory user repository; accounts are lost on restart");

    let deps = UserServiceDeps {
        users: Arc::new(InMemoryUserRepository::new()),
        hasher: Arc::new(PasswordService::from_algorithm(
            password.algorithm,
            password.bcrypt_cost,
        )),
        tokens,
        codes: create_code_cache(&config.cache).await?,
        email: create_email_sender(&config.email)?,
        events: create_event_publisher(&config.event_bus).await?,
    };

    let service = UserServiceImpl::new(deps)
        .with_code_ttl(Duration::from_secs(config.auth.verification.code_ttl_secs))
        .with_publish_policy(config.auth.registration.publish_policy);
    Ok(Arc::new(service))
}

async fn create_code_cache(config: &CacheConfig) -> anyhow::Result<Arc<dyn CodeCache>> {
    let cache: Arc<dyn CodeCache> = match config.provider {
        CacheProvider::Moka => Arc::new(MokaCodeCache::with_capacity(config.max_capacity)),
        CacheProvider::Redis => Arc::new(
            RedisCodeCache::connect(&config.redis_url)
                .await
                .context("verification code cache")?,
        ),
    };
    info!(provider = cache.provider_name(), "Verification code cache ready");
    Ok(cache)
}

async fn create_event_publisher(
    config: &EventBusConfig,
) -> anyhow::Result<Arc<dyn UserEventPublisher>> {
    let publisher: Arc<dyn UserEventPublisher> = match config.provider {
        EventBusProvider::Null => Arc::new(NullUserEventPublisher::new()),
        EventBusProvider::Nats => Arc::new(
            NatsUserEventPublisher::with_options(
                &config.nats_url,
                &config.user_registered_subject,
                Some(config.nats_client_name.as_str()),
                Duration::from_millis(config.connection_timeout_ms),
            )
            .await
            .context("user event publisher")?,
        ),
    };
    info!(provider = publisher.provider_name(), "User event publisher ready");
    Ok(publisher)
}

fn create_email_sender(config: &EmailConfig) -> anyhow::Result<Arc<dyn EmailSender>> {
    let sender: Arc<dyn EmailSender> = match config.provider {
        EmailProvider::Log => Arc::new(LogEmailSender::new()),
        EmailProvider::Smtp => Arc::new(
            SmtpEmailSender::new(&SmtpSettings {
                host: config.smtp_host.clone(),
                port: config.smtp_port,
                username: config.smtp_username.clone(),
                password: config.smtp_password.clone(),
                from: config.from.clone(),
                starttls: config.starttls,
            })
            .context("email sender")?,
        ),
    };
    info!(provider = sender.provider_name(), "Email sender ready");
    Ok(sender)
}

/// Serve until Ctrl-C, then drain in-flight calls
async fn serve(service: AuthGrpcService, config: &ServerConfig) -> anyhow::Result<()> {
    let address: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;

    info!(%address, "gRPC server listening");
    Server::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .add_service(service.into_server())
        .serve_with_shutdown(address, shutdown_signal())
        .await
        .context("gRPC server failed")?;

    info!("Auth service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for the shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
