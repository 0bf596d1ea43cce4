//! ValidateToken Handler

use authsvc_application::ports::UserServiceInterface;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{ValidateTokenArgs, validated};
use crate::convert::role_to_proto;
use crate::error::to_status;
use crate::proto;

/// Handler for token introspection by other services
pub struct ValidateTokenHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl ValidateTokenHandler {
    /// Create a new validate_token handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the ValidateToken request
    pub async fn handle(
        &self,
        request: Request<proto::ValidateTokenRequest>,
    ) -> Result<Response<proto::ValidateTokenResponse>, Status> {
        let args = validated(ValidateTokenArgs::from(request.into_inner()))?;

        let payload = self
            .users
            .validate_token(&args.jwt)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::ValidateTokenResponse {
            valid: true,
            user_id: payload.user_id,
            role: role_to_proto(payload.role),
            expires_at: payload.expires_at,
        }))
    }
}
