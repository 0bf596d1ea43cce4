//! Infrastructure service ports

/// User event publishing port
pub mod events;

pub use events::UserEventPublisher;
