//! Registration side-effect policy

use serde::{Deserialize, Serialize};

/// What registration does when the registered event cannot be published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    /// Log the failure and report the registration as successful
    #[default]
    BestEffort,
    /// Fail the registration call; the account stays persisted
    Required,
}
