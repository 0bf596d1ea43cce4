//! Fully qualified RPC method paths and their access rules
//!
//! | Method | Access |
//! |--------|--------|
//! | Register, Login, ValidateToken | public |
//! | SendVerificationCode, VerifyAccount | public |
//! | ResetPassword, ConfirmResetPassword | public |
//! | GetUserByID, ChangePassword | admin, teacher, student |
//! | UpdateUserProfile | admin, teacher |

use authsvc_domain::value_objects::Role;
use std::collections::HashMap;

pub const REGISTER: &str = "/auth.AuthService/Register";
pub const LOGIN: &str = "/auth.AuthService/Login";
pub const VALIDATE_TOKEN: &str = "/auth.AuthService/ValidateToken";
pub const SEND_VERIFICATION_CODE: &str = "/auth.AuthService/SendVerificationCode";
pub const VERIFY_ACCOUNT: &str = "/auth.AuthService/VerifyAccount";
pub const RESET_PASSWORD: &str = "/auth.AuthService/ResetPassword";
pub const CONFIRM_RESET_PASSWORD: &str = "/auth.AuthService/ConfirmResetPassword";
pub const GET_USER_BY_ID: &str = "/auth.AuthService/GetUserByID";
pub const UPDATE_USER_PROFILE: &str = "/auth.AuthService/UpdateUserProfile";
pub const CHANGE_PASSWORD: &str = "/auth.AuthService/ChangePassword";

/// Methods callable without a bearer token
pub const PUBLIC_METHODS: &[&str] = &[
    REGISTER,
    LOGIN,
    VALIDATE_TOKEN,
    SEND_VERIFICATION_CODE,
    VERIFY_ACCOUNT,
    RESET_PASSWORD,
    CONFIRM_RESET_PASSWORD,
];

/// Roles allowed per method; methods without an entry admit any
/// authenticated caller
pub fn default_permissions() -> HashMap<&'static str, Vec<Role>> {
    HashMap::from([
        (GET_USER_BY_ID, vec![Role::Admin, Role::Teacher, Role::Student]),
        (CHANGE_PASSWORD, vec![Role::Admin, Role::Teacher, Role::Student]),
        (UPDATE_USER_PROFILE, vec![Role::Admin, Role::Teacher]),
    ])
}
