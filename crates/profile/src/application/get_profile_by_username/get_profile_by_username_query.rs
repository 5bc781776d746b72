// crates/profile/src/application/get_profile_by_username/get_profile_by_username_query.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileByUsernameQuery {
    pub username: String,
}
