//! Login Handler

use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::constants::TOKEN_TYPE_BEARER;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{LoginArgs, validated};
use crate::error::to_login_status;
use crate::proto;

/// Handler for password login
pub struct LoginHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl LoginHandler {
    /// Create a new login handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the Login request
    pub async fn handle(
        &self,
        request: Request<proto::LoginRequest>,
    ) -> Result<Response<proto::LoginResponse>, Status> {
        let args = validated(LoginArgs::from(request.into_inner()))?;

        let (issued, _payload) = self
            .users
            .login(&args.email, &args.password)
            .await
            .map_err(|e| to_login_status(&e))?;

        Ok(Response::new(proto::LoginResponse {
            access_token: issued.token,
            expires_at: issued.expires_at,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }))
    }
}
