// crates/profile/src/application/get_profile_by_username/get_profile_by_username_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::Username;
use shared_kernel::errors::Result;

use crate::application::get_profile_by_username::{GetProfileByUsernameQuery, ProfileCardDto};
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct GetProfileByUsernameUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl GetProfileByUsernameUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: GetProfileByUsernameQuery) -> Result<ProfileCardDto> {
        let username = Username::try_new(query.username)?;

        let profile: Profile = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or_not_found(username.as_str())?;

        Ok(ProfileCardDto::from(profile))
    }
}
