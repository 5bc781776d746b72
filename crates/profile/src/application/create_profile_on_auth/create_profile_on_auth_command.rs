// crates/profile/src/application/create_profile_on_auth/create_profile_on_auth_command.rs

use serde::{Deserialize, Serialize};
use crate::application::CallerIdentity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileOnAuthCommand {
    pub caller: Option<CallerIdentity>,
}
