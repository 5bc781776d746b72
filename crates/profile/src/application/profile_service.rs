// crates/profile/src/application/profile_service.rs

use std::sync::Arc;
use serde_json::Value;
use shared_kernel::errors::AppResult;

use crate::application::CallerIdentity;
use crate::application::create_profile_on_auth::{CreateProfileOnAuthCommand, CreateProfileOnAuthUseCase};
use crate::application::fetch_own_profile::{FetchOwnProfileQuery, FetchOwnProfileUseCase};
use crate::application::get_nearby_profiles::{GetNearbyProfilesQuery, GetNearbyProfilesUseCase};
use crate::application::get_profile_by_username::{GetProfileByUsernameQuery, GetProfileByUsernameUseCase, ProfileCardDto};
use crate::application::submit_review::{SubmitReviewCommand, SubmitReviewUseCase};
use crate::application::update_own_profile::{UpdateOwnProfileCommand, UpdateOwnProfileUseCase};
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::services::{GeoQueryEngine, LocationPrivacyFilter};

pub const PROFILE_UPDATED: &str = "profile updated";
pub const REVIEW_ADDED: &str = "review added";

/// Façade exposée à la couche UI.
/// Chaque opération renvoie un `AppResult`, prêt à être converti en `Envelope`.
pub struct ProfileService {
    create_profile_on_auth: CreateProfileOnAuthUseCase,
    fetch_own_profile: FetchOwnProfileUseCase,
    update_own_profile: UpdateOwnProfileUseCase,
    submit_review: SubmitReviewUseCase,
    get_nearby_profiles: GetNearbyProfilesUseCase,
    get_profile_by_username: GetProfileByUsernameUseCase,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn ProfileRepository>, privacy: Arc<LocationPrivacyFilter>) -> Self {
        Self {
            create_profile_on_auth: CreateProfileOnAuthUseCase::new(repo.clone()),
            fetch_own_profile: FetchOwnProfileUseCase::new(repo.clone()),
            update_own_profile: UpdateOwnProfileUseCase::new(repo.clone(), privacy),
            submit_review: SubmitReviewUseCase::new(repo.clone()),
            get_nearby_profiles: GetNearbyProfilesUseCase::new(GeoQueryEngine::new(repo.clone())),
            get_profile_by_username: GetProfileByUsernameUseCase::new(repo),
        }
    }

    pub async fn sign_in(&self, caller: Option<CallerIdentity>) -> AppResult<Profile> {
        Ok(self
            .create_profile_on_auth
            .execute(CreateProfileOnAuthCommand { caller })
            .await?)
    }

    pub async fn fetch_own(&self, caller: Option<CallerIdentity>) -> AppResult<Profile> {
        Ok(self.fetch_own_profile.execute(FetchOwnProfileQuery { caller }).await?)
    }

    pub async fn update_own(&self, caller: Option<CallerIdentity>, changes: Value) -> AppResult<String> {
        self.update_own_profile
            .execute(UpdateOwnProfileCommand { caller, changes })
            .await?;
        Ok(PROFILE_UPDATED.to_string())
    }

    pub async fn submit_review(
        &self,
        caller: Option<CallerIdentity>,
        username: impl Into<String>,
        star: Option<i64>,
    ) -> AppResult<String> {
        self.submit_review
            .execute(SubmitReviewCommand { caller, username: username.into(), star })
            .await?;
        Ok(REVIEW_ADDED.to_string())
    }

    pub async fn nearby(&self, lat: Option<&str>, lng: Option<&str>) -> AppResult<Vec<Profile>> {
        let query = GetNearbyProfilesQuery {
            lat: lat.map(str::to_string),
            lng: lng.map(str::to_string),
        };
        Ok(self.get_nearby_profiles.execute(query).await?)
    }

    pub async fn view_profile(&self, username: impl Into<String>) -> AppResult<ProfileCardDto> {
        Ok(self
            .get_profile_by_username
            .execute(GetProfileByUsernameQuery { username: username.into() })
            .await?)
    }
}
