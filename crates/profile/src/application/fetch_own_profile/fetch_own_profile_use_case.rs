// crates/profile/src/application/fetch_own_profile/fetch_own_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::CallerIdentity;
use crate::application::fetch_own_profile::FetchOwnProfileQuery;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct FetchOwnProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl FetchOwnProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: FetchOwnProfileQuery) -> Result<Profile> {
        let caller = CallerIdentity::require(query.caller.as_ref())?;

        self.repo
            .find_by_email(&caller.email)
            .await?
            .ok_or_not_found(caller.email.as_str())
    }
}
