//! Error handling types
//!
//! The first group of variants is the business taxonomy that transports
//! translate into status codes. The second group carries collaborator
//! failures (storage, cache, network) and is never shown verbatim to callers.
//!
//! Collaborator errors are wrapped at layer boundaries with
//! [`Error::Operation`]; [`Error::root`] walks back through those wrappers so
//! a domain variant can still be matched after any amount of wrapping.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the auth service
#[derive(Error, Debug)]
pub enum Error {
    /// Registration with an email that already belongs to a user
    #[error("email already exists")]
    EmailAlreadyExists,

    /// Registration with a username that already belongs to a user
    #[error("username already exists")]
    UsernameAlreadyExists,

    /// No user matches the lookup
    #[error("user not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Caller's role does not allow acting on the target
    #[error("permission denied")]
    PermissionDenied,

    /// Signature, format or claim type check failed
    #[error("invalid token")]
    InvalidToken,

    /// Token expiry has passed
    #[error("token expired")]
    TokenExpired,

    /// Token verified but a required claim is absent or mistyped
    #[error("token is missing the '{claim}' claim")]
    MissingClaim {
        /// Name of the claim
        claim: &'static str,
    },

    /// No active verification code for the user
    #[error("no active verification code")]
    CodeNotFound,

    /// Supplied code differs from the active one
    #[error("verification code is invalid")]
    CodeInvalid,

    /// Active code has passed its expiry
    #[error("verification code has expired")]
    CodeExpired,

    /// Code was issued for another purpose
    #[error("verification code purpose mismatch")]
    InvalidPurpose,

    /// New password equals the current one
    #[error("new password must differ from the current password")]
    PasswordUnchanged,

    /// Update request carries no changes
    #[error("nothing to update")]
    NothingToUpdate,

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Unique constraint violated in the persistence layer
    #[error("Duplicate key: {field}")]
    DuplicateKey {
        /// Field that carries the unique constraint
        field: String,
    },

    /// Resource not found in the persistence layer
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Failure annotated with the operation that produced it
    #[error("{operation}: {source}")]
    Operation {
        /// Operation name, e.g. `register: create user`
        operation: String,
        /// The wrapped error
        #[source]
        source: Box<Error>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a duplicate key error
    pub fn duplicate_key<S: Into<String>>(field: S) -> Self {
        Self::DuplicateKey {
            field: field.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error with source
    pub fn cache_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Cache {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Wrapping and inspection
impl Error {
    /// Annotate this error with the operation that produced it
    #[must_use]
    pub fn in_operation<S: Into<String>>(self, operation: S) -> Self {
        Self::Operation {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any [`Error::Operation`] wrappers
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Self::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    /// Whether the root error belongs to the business taxonomy
    pub fn is_domain(&self) -> bool {
        matches!(
            self.root(),
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::UserNotFound
                | Self::InvalidCredentials
                | Self::PermissionDenied
                | Self::InvalidToken
                | Self::TokenExpired
                | Self::MissingClaim { .. }
                | Self::CodeNotFound
                | Self::CodeInvalid
                | Self::CodeExpired
                | Self::InvalidPurpose
                | Self::PasswordUnchanged
                | Self::NothingToUpdate
                | Self::InvalidArgument { .. }
        )
    }
}

/// Attach an operation name to a failing domain `Result`
pub trait OperationExt<T> {
    /// Wrap the error, if any, with [`Error::in_operation`]
    fn in_operation(self, operation: &str) -> Result<T>;
}

impl<T> OperationExt<T> for Result<T> {
    fn in_operation(self, operation: &str) -> Result<T> {
        self.map_err(|e| e.in_operation(operation))
    }
}
