//! Email sender implementations

pub mod log;
#[cfg(feature = "email-smtp")]
pub mod smtp;

pub use self::log::LogEmailSender;
#[cfg(feature = "email-smtp")]
pub use self::smtp::{SmtpEmailSender, SmtpSettings};
