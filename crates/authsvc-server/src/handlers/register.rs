//! Register Handler

use authsvc_application::ports::UserServiceInterface;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::info;

use crate::args::{RegisterArgs, validated};
use crate::error::to_status;
use crate::proto;

/// Handler for account registration
pub struct RegisterHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl RegisterHandler {
    /// Create a new register handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the Register request
    pub async fn handle(
        &self,
        request: Request<proto::RegisterRequest>,
    ) -> Result<Response<proto::RegisterResponse>, Status> {
        let args = validated(RegisterArgs::try_from(request.into_inner())?)?;

        let user = self
            .users
            .register(&args.email, &args.password, args.role)
            .await
            .map_err(|e| to_status(&e))?;

        info!(user_id = %user.id, "Register successful");
        Ok(Response::new(proto::RegisterResponse {
            success: true,
            message: "user registered".to_string(),
            user_id: user.id,
        }))
    }
}
