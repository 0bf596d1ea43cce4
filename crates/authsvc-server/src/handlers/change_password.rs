//! ChangePassword Handler

use authsvc_application::ports::UserServiceInterface;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{ChangePasswordArgs, validated};
use crate::error::to_status;
use crate::interceptors::authenticated_user;
use crate::proto;

/// Handler for password changes with the old password
pub struct ChangePasswordHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl ChangePasswordHandler {
    /// Create a new change_password handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the ChangePassword request
    pub async fn handle(
        &self,
        request: Request<proto::ChangePasswordRequest>,
    ) -> Result<Response<proto::ChangePasswordResponse>, Status> {
        let actor = authenticated_user(&request)?.clone();
        let args = validated(ChangePasswordArgs::from(request.into_inner()))?;

        self.users
            .change_password(&actor, &args.user_id, &args.old_password, &args.new_password)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::ChangePasswordResponse {
            success: true,
            message: "password changed".to_string(),
        }))
    }
}
