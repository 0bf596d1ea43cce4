//! Conversions between domain types and protobuf messages

use crate::proto;
use authsvc_domain::entities::User;
use authsvc_domain::value_objects::Role;
use tonic::Status;

/// Domain role of a protobuf role value
///
/// Unknown numeric values are rejected; `ROLE_UNSPECIFIED` maps to
/// `Role::Unspecified` and is left to argument validation.
pub fn role_from_proto(value: i32) -> Result<Role, Status> {
    match proto::Role::try_from(value) {
        Ok(proto::Role::Unspecified) => Ok(Role::Unspecified),
        Ok(proto::Role::Admin) => Ok(Role::Admin),
        Ok(proto::Role::Teacher) => Ok(Role::Teacher),
        Ok(proto::Role::Student) => Ok(Role::Student),
        Err(_) => Err(Status::invalid_argument("invalid role")),
    }
}

/// Protobuf value of a domain role
pub fn role_to_proto(role: Role) -> i32 {
    let role = match role {
        Role::Unspecified => proto::Role::Unspecified,
        Role::Admin => proto::Role::Admin,
        Role::Teacher => proto::Role::Teacher,
        Role::Student => proto::Role::Student,
    };
    i32::from(role)
}

/// Public view of an account; the password hash is never copied
pub fn user_to_proto(user: &User) -> proto::User {
    proto::User {
        user_id: user.id.clone(),
        email: user.email.clone(),
        username: user.username.clone(),
        role: role_to_proto(user.role),
        phone: user.phone.clone(),
        verified: user.verified,
        created_at: user.created_at.timestamp(),
        updated_at: user.updated_at.timestamp(),
    }
}
