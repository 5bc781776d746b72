// crates/profile/src/application/update_own_profile/update_own_profile_command.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::application::CallerIdentity;

/// `changes` est le corps brut de la requête du propriétaire, interprété par `UpdateOwnProfileDto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOwnProfileCommand {
    pub caller: Option<CallerIdentity>,
    pub changes: Value,
}
