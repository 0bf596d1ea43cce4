//! One-time verification codes
//!
//! A code belongs to one user and one purpose. Only the most recently issued
//! code of a user is effective: storing a new one replaces the old entry.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// What a verification code authorizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePurpose {
    /// Confirms ownership of the account email
    EmailVerification,
    /// Authorizes setting a new password without the old one
    ResetPassword,
}

impl CodePurpose {
    /// Wire name of the purpose
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailVerification => "email_verification",
            Self::ResetPassword => "reset_password",
        }
    }
}

impl fmt::Display for CodePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodePurpose {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email_verification" => Ok(Self::EmailVerification),
            "reset_password" => Ok(Self::ResetPassword),
            _ => Err(Error::InvalidPurpose),
        }
    }
}

/// A code issued to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Owner of the code
    pub user_id: String,
    /// Zero-padded numeric code
    pub code: String,
    /// What the code authorizes
    pub purpose: CodePurpose,
    /// Instant after which the code is rejected
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Create a code that expires `ttl` from now
    pub fn new(
        user_id: impl Into<String>,
        code: impl Into<String>,
        purpose: CodePurpose,
        ttl: Duration,
    ) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            user_id: user_id.into(),
            code: code.into(),
            purpose,
            expires_at: Utc::now().checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Whether the code is past its expiry at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Time left before expiry, `None` once expired
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> Option<Duration> {
        (self.expires_at - now).to_std().ok().filter(|d| !d.is_zero())
    }
}

/// Outcome of a cache lookup
///
/// A miss is an ordinary outcome, not an error; storage failures are
/// reported through `Err` separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLookup {
    /// An unexpired code is stored for the user
    Found(VerificationCode),
    /// Nothing is stored for the user
    Miss,
}

impl CodeLookup {
    /// Convert into an `Option`
    pub fn into_option(self) -> Option<VerificationCode> {
        match self {
            Self::Found(code) => Some(code),
            Self::Miss => None,
        }
    }
}

impl From<Option<VerificationCode>> for CodeLookup {
    fn from(value: Option<VerificationCode>) -> Self {
        value.map_or(Self::Miss, Self::Found)
    }
}
