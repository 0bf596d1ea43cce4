//! Bearer token authentication and role authorization
//!
//! For a protected method the interceptor reads the `authorization`
//! metadata, strips the `Bearer ` scheme, validates the token, checks the
//! caller's role against the permission map and stores the token payload in
//! the request extensions. Handlers read it back with
//! [`authenticated_user`].

use crate::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};
use crate::methods;
use authsvc_domain::ports::TokenService;
use authsvc_domain::value_objects::{Role, TokenPayload};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tonic::{Request, Status};
use tracing::{debug, warn};

/// Identity of the caller, only ever inserted by [`AuthInterceptor`]
#[derive(Debug, Clone)]
struct AuthenticatedUser(TokenPayload);

/// Authenticates and authorizes calls before they reach a handler
#[derive(Clone)]
pub struct AuthInterceptor {
    tokens: Arc<dyn TokenService>,
    public_methods: HashSet<String>,
    permissions: HashMap<String, Vec<Role>>,
}

impl AuthInterceptor {
    /// Interceptor with the service's own public methods and permission map
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self::with_rules(
            tokens,
            methods::PUBLIC_METHODS.iter().copied(),
            methods::default_permissions(),
        )
    }

    /// Interceptor with custom rules
    pub fn with_rules<P, M, R>(
        tokens: Arc<dyn TokenService>,
        public_methods: P,
        permissions: M,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        M: IntoIterator<Item = (R, Vec<Role>)>,
        R: Into<String>,
    {
        Self {
            tokens,
            public_methods: public_methods.into_iter().map(Into::into).collect(),
            permissions: permissions
                .into_iter()
                .map(|(method, roles)| (method.into(), roles))
                .collect(),
        }
    }

    /// Whether `method` skips authentication
    pub fn is_public(&self, method: &str) -> bool {
        self.public_methods.contains(method)
    }

    /// Run the authentication and authorization steps for `method`
    ///
    /// On success the caller identity is attached to `request` (protected
    /// methods only).
    pub fn authorize<T>(&self, method: &str, request: &mut Request<T>) -> Result<(), Status> {
        if self.is_public(method) {
            return Ok(());
        }

        let header = request
            .metadata()
            .get(AUTHORIZATION_HEADER)
            .ok_or_else(|| Status::unauthenticated("authorization header not supplied"))?
            .to_str()
            .map_err(|_| Status::unauthenticated("invalid token"))?;
        let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header).trim();

        let payload = self.tokens.validate(token).map_err(|e| {
            debug!(method, reason = %e, "Token rejected");
            Status::unauthenticated("invalid token")
        })?;

        if let Some(allowed) = self.permissions.get(method)
            && !allowed.contains(&payload.role)
        {
            warn!(
                method,
                role = %payload.role,
                user_id = %payload.user_id,
                "Role not authorized"
            );
            return Err(Status::permission_denied("role not authorized"));
        }

        request.extensions_mut().insert(AuthenticatedUser(payload));
        Ok(())
    }
}

/// Caller identity attached by [`AuthInterceptor::authorize`]
///
/// Fails with `Unauthenticated` when the request never went through the
/// interceptor.
pub fn authenticated_user<T>(request: &Request<T>) -> Result<&TokenPayload, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| &user.0)
        .ok_or_else(|| Status::unauthenticated("caller identity missing"))
}
