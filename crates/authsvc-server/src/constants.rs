//! Transport constants

/// Metadata key carrying the bearer credential
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Scheme prefix of the authorization value
pub const BEARER_PREFIX: &str = "Bearer ";

/// Metadata key used to correlate a request across services
pub const REQUEST_ID_HEADER: &str = "x-request-id";
