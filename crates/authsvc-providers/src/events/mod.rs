//! User event publisher implementations

#[cfg(feature = "events-nats")]
pub mod nats;
pub mod null;

#[cfg(feature = "events-nats")]
pub use self::nats::NatsUserEventPublisher;
pub use self::null::NullUserEventPublisher;
