// crates/profile/src/application/fetch_own_profile/fetch_own_profile_query.rs

use serde::{Deserialize, Serialize};
use crate::application::CallerIdentity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOwnProfileQuery {
    pub caller: Option<CallerIdentity>,
}
