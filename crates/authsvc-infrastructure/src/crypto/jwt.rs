//! HS256 access tokens
//!
//! Claims: `sub` (user id), `role`, `iat`, `exp`. Validation runs the
//! library checks first (signature, algorithm, `exp` against the clock with
//! zero leeway) and then requires `sub`, `role` and `exp` to be present and
//! correctly typed.

use std::collections::HashSet;
use std::time::Duration;

use authsvc_domain::error::{Error, Result};
use authsvc_domain::ports::TokenService;
use authsvc_domain::value_objects::{IssuedToken, Role, TokenPayload};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::JwtConfig;
use crate::constants::JWT_EXPIRY_LEEWAY_SECS;

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    role: &'a str,
    iat: i64,
    exp: i64,
}

/// Signs and validates access tokens with a shared secret
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenService {
    /// Create a service signing with `secret` and issuing tokens valid for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = JWT_EXPIRY_LEEWAY_SECS;
        // exp presence is checked after decoding so it reports as a missing claim
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Create a service from configuration
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, Duration::from_secs(config.expiration_secs))
    }

    fn payload_from_claims(claims: &Map<String, Value>) -> Result<TokenPayload> {
        let user_id = claims
            .get("sub")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingClaim { claim: "sub" })?;
        let role = claims
            .get("role")
            .and_then(Value::as_str)
            .ok_or(Error::MissingClaim { claim: "role" })?
            .parse::<Role>()
            .map_err(|_| Error::InvalidToken)?;
        let expires_at = claims
            .get("exp")
            .and_then(Value::as_i64)
            .ok_or(Error::MissingClaim { claim: "exp" })?;
        let issued_at = claims
            .get("iat")
            .and_then(Value::as_i64)
            .and_then(|iat| DateTime::from_timestamp(iat, 0))
            .unwrap_or(DateTime::UNIX_EPOCH);
        let email = claims
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(TokenPayload {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
            role,
            issued_at,
            expires_at,
        })
    }
}

impl TokenService for JwtTokenService {
    fn generate(&self, user_id: &str, role: Role) -> Result<IssuedToken> {
        let issued_at = Utc::now();
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| Error::config_with_source("JWT expiration out of range", e))?;
        let expires_at = (issued_at + ttl).timestamp();

        let claims = Claims {
            sub: user_id,
            role: role.as_str(),
            iat: issued_at.timestamp(),
            exp: expires_at,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| Error::infrastructure_with_source("Failed to sign token", e))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    fn validate(&self, token: &str) -> Result<TokenPayload> {
        let data = decode::<Map<String, Value>>(token, &self.decoding, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                kind => {
                    debug!(reason = ?kind, "Token rejected");
                    Error::InvalidToken
                }
            },
        )?;

        Self::payload_from_claims(&data.claims)
    }
}
