//! GetUserByID Handler

use authsvc_application::ports::UserServiceInterface;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::args::{UserIdArgs, validated};
use crate::convert::user_to_proto;
use crate::error::to_status;
use crate::interceptors::authenticated_user;
use crate::proto;

/// Handler for role-scoped account reads
pub struct GetUserHandler {
    users: Arc<dyn UserServiceInterface>,
}

impl GetUserHandler {
    /// Create a new get_user handler
    pub fn new(users: Arc<dyn UserServiceInterface>) -> Self {
        Self { users }
    }

    /// Handle the GetUserByID request
    pub async fn handle(
        &self,
        request: Request<proto::GetUserRequest>,
    ) -> Result<Response<proto::GetUserResponse>, Status> {
        let actor = authenticated_user(&request)?.clone();
        let args = validated(UserIdArgs::from(request.into_inner()))?;

        let user = self
            .users
            .get_user_by_id(&actor, &args.user_id)
            .await
            .map_err(|e| to_status(&e))?;

        Ok(Response::new(proto::GetUserResponse {
            success: true,
            message: "user found".to_string(),
            user: Some(user_to_proto(&user)),
        }))
    }
}
