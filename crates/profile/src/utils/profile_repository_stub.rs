// crates/profile/src/utils/profile_repository_stub.rs
#![cfg(test)]

use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;

use crate::domain::entities::{Profile, Review};
use crate::domain::repositories::{ProfileFilter, ProfileRepository};
use crate::domain::value_objects::{OwnerPatch, ProfileId};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Email, Username};
use shared_kernel::errors::{DomainError, Result};

// --- STUB PROFILE REPOSITORY ---
// Renvoie des données préparées et enregistre chaque mutation reçue.
pub struct ProfileRepositoryStub {
    /// Résultat de `find_by_email` / `find_by_id` (profil de l'appelant)
    pub profile_to_return: Mutex<Option<Profile>>,
    /// Si non vide, consommé en priorité par `find_by_email` (simulation de courses)
    pub email_lookups: Mutex<VecDeque<Option<Profile>>>,
    /// Résultat de `find_by_username` (profil évalué / consulté)
    pub rated_to_return: Mutex<Option<Profile>>,
    pub scan_to_return: Mutex<Vec<Profile>>,
    /// Erreur renvoyée par toutes les mutations
    pub error_to_return: Mutex<Option<DomainError>>,

    pub created: Mutex<Vec<Profile>>,
    pub patches: Mutex<Vec<(Email, OwnerPatch)>>,
    pub upserts: Mutex<Vec<(Username, Review)>>,
    pub scans: Mutex<Vec<ProfileFilter>>,
}

impl Default for ProfileRepositoryStub {
    fn default() -> Self {
        Self {
            profile_to_return: Mutex::new(None),
            email_lookups: Mutex::new(VecDeque::new()),
            rated_to_return: Mutex::new(None),
            scan_to_return: Mutex::new(Vec::new()),
            error_to_return: Mutex::new(None),
            created: Mutex::new(Vec::new()),
            patches: Mutex::new(Vec::new()),
            upserts: Mutex::new(Vec::new()),
            scans: Mutex::new(Vec::new()),
        }
    }
}

impl ProfileRepositoryStub {
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile_to_return: Mutex::new(Some(profile)),
            ..Default::default()
        }
    }

    pub fn mutation_count(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.patches.lock().unwrap().len()
            + self.upserts.lock().unwrap().len()
    }

    fn fail_if_configured(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn find_by_id(&self, _id: &ProfileId) -> Result<Option<Profile>> {
        Ok(self.profile_to_return.lock().unwrap().clone())
    }

    async fn find_by_username(&self, _username: &Username) -> Result<Option<Profile>> {
        Ok(self.rated_to_return.lock().unwrap().clone())
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<Profile>> {
        if let Some(next) = self.email_lookups.lock().unwrap().pop_front() {
            return Ok(next);
        }
        Ok(self.profile_to_return.lock().unwrap().clone())
    }

    async fn create(&self, profile: &Profile) -> Result<Profile> {
        self.created.lock().unwrap().push(profile.clone());
        self.fail_if_configured()?;
        Ok(profile.clone())
    }

    async fn update_owner_fields(&self, email: &Email, patch: &OwnerPatch) -> Result<Profile> {
        self.patches.lock().unwrap().push((email.clone(), patch.clone()));
        self.fail_if_configured()?;

        let mut profile = self
            .profile_to_return
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Profile::not_found(email.as_str()))?;
        profile.apply_owner_patch(patch);
        Ok(profile)
    }

    async fn upsert_review(&self, rated: &Username, review: &Review) -> Result<Profile> {
        self.upserts.lock().unwrap().push((rated.clone(), review.clone()));
        self.fail_if_configured()?;

        let mut profile = self
            .rated_to_return
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Profile::not_found(rated.as_str()))?;
        profile.upsert_review(review.clone());
        Ok(profile)
    }

    async fn scan(&self, filter: &ProfileFilter) -> Result<Vec<Profile>> {
        self.scans.lock().unwrap().push(*filter);
        Ok(self.scan_to_return.lock().unwrap().clone())
    }

    async fn delete(&self, _id: &ProfileId) -> Result<()> {
        self.fail_if_configured()
    }
}
