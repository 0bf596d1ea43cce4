//! UpdateUserProfile Handler

use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::entities::UpdateProfileParams;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{UpdateProfileArgs, validated};
use crate::convert::user_to_proto;
use crate::error::to_status;
use crate::interceptors::authenticated_user;
use crate::proto;

/// Handler for role-scoped profile updates
pub struct UpdateProfileHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl UpdateProfileHandler {
    /// Create a new update_profile handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the UpdateUserProfile request
    pub async fn handle(
        &self,
        request: Request<proto::UpdateUserRequest>,
    ) -> Result<Response<proto::UpdateUserResponse>, Status> {
        let actor = authenticated_user(&request)?.clone();
        let args = validated(UpdateProfileArgs::from(request.into_inner()))?;

        let params = UpdateProfileParams {
            user_id: args.user_id,
            email: args.email.unwrap_or_default(),
            username: args.username.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
        };
        let user = self
            .users
            .update_profile(&actor, params)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::UpdateUserResponse {
            success: true,
            message: "user updated".to_string(),
            user: Some(user_to_proto(&user)),
        }))
    }
}
