//! User roles and the access predicate shared by every role-scoped operation

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried by a user account and by its access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Role not set; never granted access to role-gated operations
    #[default]
    #[serde(rename = "")]
    Unspecified,
    /// Full access to every account
    Admin,
    /// Access to own account and student accounts
    Teacher,
    /// Access to own account only
    Student,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Whether an account with this role may act on the target account.
    ///
    /// | actor   | self | student | teacher | admin |
    /// |---------|------|---------|---------|-------|
    /// | admin   | yes  | yes     | yes     | yes   |
    /// | teacher | yes  | yes     | no      | no    |
    /// | student | yes  | no      | no      | no    |
    pub fn can_act_on(self, actor_id: &str, target_id: &str, target_role: Role) -> bool {
        match self {
            Self::Admin => true,
            Self::Teacher => actor_id == target_id || target_role == Role::Student,
            Self::Student => actor_id == target_id,
            Self::Unspecified => false,
        }
    }

    /// Like [`Role::can_act_on`] but yields `PermissionDenied` on refusal
    pub fn ensure_can_act_on(
        self,
        actor_id: &str,
        target_id: &str,
        target_role: Role,
    ) -> Result<()> {
        if self.can_act_on(actor_id, target_id, target_role) {
            Ok(())
        } else {
            Err(Error::PermissionDenied)
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(Error::invalid_argument(format!("unknown role '{other}'"))),
        }
    }
}
