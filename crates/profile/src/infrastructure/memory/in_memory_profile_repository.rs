// crates/profile/src/infrastructure/memory/in_memory_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Email, Username};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::domain::entities::{Profile, Review};
use crate::domain::repositories::{ProfileFilter, ProfileRepository};
use crate::domain::value_objects::{OwnerPatch, ProfileId};
use crate::infrastructure::memory::ProfileCollection;

/// Le stockage ne sait faire que des écritures conditionnelles sur le document entier :
/// chaque primitive de mutation est donc une boucle optimiste
/// (lecture de la version, mutation locale, écriture conditionnelle, retry sur conflit).
pub struct InMemoryProfileRepository {
    collection: ProfileCollection,
    retry: RetryConfig,
}

impl InMemoryProfileRepository {
    pub fn new(retry: RetryConfig) -> Self {
        Self {
            collection: ProfileCollection::new(),
            retry,
        }
    }

    async fn try_update_owner_fields_once(&self, email: &Email, patch: &OwnerPatch) -> Result<Profile> {
        // 1. Lecture
        let mut profile = self
            .collection
            .find_by_email(email)?
            .ok_or_else(|| Profile::not_found(email.as_str()))?;
        let expected_version = profile.version();

        // 2. Mutation locale, limitée aux champs présents
        if !profile.apply_owner_patch(patch) {
            return Ok(profile);
        }

        // 3. Écriture conditionnelle
        self.collection.replace_if_version(profile, expected_version)
    }

    async fn try_upsert_review_once(&self, rated: &Username, review: &Review) -> Result<Profile> {
        let mut profile = self
            .collection
            .find_by_username(rated)?
            .ok_or_else(|| Profile::not_found(rated.as_str()))?;
        let expected_version = profile.version();

        profile.upsert_review(review.clone());

        self.collection.replace_if_version(profile, expected_version)
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>> {
        self.collection.get(id)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>> {
        self.collection.find_by_username(username)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Profile>> {
        self.collection.find_by_email(email)
    }

    async fn create(&self, profile: &Profile) -> Result<Profile> {
        self.collection.insert(profile.clone())
    }

    async fn update_owner_fields(&self, email: &Email, patch: &OwnerPatch) -> Result<Profile> {
        with_retry(self.retry, move || async move {
            self.try_update_owner_fields_once(email, patch).await
        }).await
    }

    async fn upsert_review(&self, rated: &Username, review: &Review) -> Result<Profile> {
        with_retry(self.retry, move || async move {
            self.try_upsert_review_once(rated, review).await
        }).await
    }

    async fn scan(&self, filter: &ProfileFilter) -> Result<Vec<Profile>> {
        self.collection.scan(filter)
    }

    async fn delete(&self, id: &ProfileId) -> Result<()> {
        self.collection
            .remove(id)?
            .map(|_| ())
            .ok_or_else(|| Profile::not_found(id))
    }
}
