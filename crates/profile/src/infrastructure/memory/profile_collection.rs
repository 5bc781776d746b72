// crates/profile/src/infrastructure/memory/profile_collection.rs

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Email, Username};
use shared_kernel::errors::{DomainError, Result, internal_err};

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileFilter;
use crate::domain::value_objects::ProfileId;

#[derive(Default)]
struct CollectionState {
    docs: HashMap<ProfileId, Profile>,
    by_email: HashMap<Email, ProfileId>,
    by_username: HashMap<Username, ProfileId>,
}

/// Collection de documents versionnés.
/// Seule garantie offerte : une écriture conditionnelle atomique par document
/// (`replace_if_version`), plus l'unicité de l'email et du username.
#[derive(Default)]
pub struct ProfileCollection {
    state: RwLock<CollectionState>,
}

impl ProfileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ProfileId) -> Result<Option<Profile>> {
        Ok(self.read()?.docs.get(id).cloned())
    }

    pub fn find_by_email(&self, email: &Email) -> Result<Option<Profile>> {
        let state = self.read()?;
        Ok(state.by_email.get(email).and_then(|id| state.docs.get(id)).cloned())
    }

    pub fn find_by_username(&self, username: &Username) -> Result<Option<Profile>> {
        let state = self.read()?;
        Ok(state.by_username.get(username).and_then(|id| state.docs.get(id)).cloned())
    }

    pub fn insert(&self, profile: Profile) -> Result<Profile> {
        let mut state = self.write()?;

        if state.by_email.contains_key(profile.email()) {
            return Err(Profile::already_exists("email", profile.email().as_str()));
        }
        if state.by_username.contains_key(profile.username()) {
            return Err(Profile::already_exists("username", profile.username().as_str()));
        }
        if state.docs.contains_key(profile.id()) {
            return Err(Profile::already_exists("id", profile.id().to_string()));
        }

        state.by_email.insert(profile.email().clone(), *profile.id());
        state.by_username.insert(profile.username().clone(), *profile.id());
        state.docs.insert(*profile.id(), profile.clone());

        Ok(profile)
    }

    /// Écriture conditionnelle : n'aboutit que si la version stockée vaut encore `expected_version`.
    pub fn replace_if_version(&self, profile: Profile, expected_version: u64) -> Result<Profile> {
        let mut state = self.write()?;
        let id = *profile.id();

        // 1. Le document doit exister et ne pas avoir bougé depuis la lecture
        let (stored_version, old_username, old_email) = match state.docs.get(&id) {
            Some(stored) => (stored.version(), stored.username().clone(), stored.email().clone()),
            None => return Err(Profile::not_found(id)),
        };

        if stored_version != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!(
                    "Profile {} is at version {}, expected {}",
                    id, stored_version, expected_version
                ),
            });
        }

        // 2. Unicité du username (un autre profil peut le détenir)
        if old_username != *profile.username() {
            if state.by_username.get(profile.username()).is_some_and(|owner| *owner != id) {
                return Err(Profile::already_exists("username", profile.username().as_str()));
            }
            state.by_username.remove(&old_username);
            state.by_username.insert(profile.username().clone(), id);
        }

        if old_email != *profile.email() {
            state.by_email.remove(&old_email);
            state.by_email.insert(profile.email().clone(), id);
        }

        // 3. Écriture
        state.docs.insert(id, profile.clone());
        Ok(profile)
    }

    pub fn scan(&self, filter: &ProfileFilter) -> Result<Vec<Profile>> {
        Ok(self
            .read()?
            .docs
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    pub fn remove(&self, id: &ProfileId) -> Result<Option<Profile>> {
        let mut state = self.write()?;
        let removed = state.docs.remove(id);

        if let Some(profile) = &removed {
            state.by_email.remove(profile.email());
            state.by_username.remove(profile.username());
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.docs.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    // Helpers
    fn read(&self) -> Result<RwLockReadGuard<'_, CollectionState>> {
        self.state.read().map_err(|_| internal_err("profile collection lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CollectionState>> {
        self.state.write().map_err(|_| internal_err("profile collection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Bio, OwnerPatch};

    fn profile(email: &str, username: &str) -> Profile {
        Profile::builder(Email::try_new(email).unwrap(), Username::try_new(username).unwrap()).build()
    }

    #[test]
    fn insert_enforces_unique_email_and_username() {
        let collection = ProfileCollection::new();
        collection.insert(profile("alice@example.com", "alice")).unwrap();

        let same_email = collection.insert(profile("alice@example.com", "other"));
        let same_username = collection.insert(profile("bob@example.com", "alice"));

        assert!(matches!(same_email, Err(DomainError::AlreadyExists { field: "email", .. })));
        assert!(matches!(same_username, Err(DomainError::AlreadyExists { field: "username", .. })));
        assert_eq!(collection.len().unwrap(), 1);
    }

    #[test]
    fn stale_version_is_rejected() {
        let collection = ProfileCollection::new();
        let stored = collection.insert(profile("alice@example.com", "alice")).unwrap();

        let mut first = stored.clone();
        first.apply_owner_patch(&OwnerPatch::new().with_bio(Bio::try_new("first").unwrap()));
        collection.replace_if_version(first, stored.version()).unwrap();

        let mut second = stored.clone();
        second.apply_owner_patch(&OwnerPatch::new().with_bio(Bio::try_new("second").unwrap()));
        let result = collection.replace_if_version(second, stored.version());

        assert!(matches!(result, Err(DomainError::ConcurrencyConflict { .. })));
        let current = collection.get(stored.id()).unwrap().unwrap();
        assert_eq!(current.bio().as_str(), "first");
    }

    #[test]
    fn rename_moves_the_username_index() {
        let collection = ProfileCollection::new();
        let stored = collection.insert(profile("alice@example.com", "alice")).unwrap();

        let mut renamed = stored.clone();
        renamed.apply_owner_patch(&OwnerPatch::new().with_username(Username::try_new("alicia").unwrap()));
        collection.replace_if_version(renamed, stored.version()).unwrap();

        assert!(collection.find_by_username(&Username::try_new("alice").unwrap()).unwrap().is_none());
        assert!(collection.find_by_username(&Username::try_new("alicia").unwrap()).unwrap().is_some());
    }

    #[test]
    fn remove_frees_the_unique_keys() {
        let collection = ProfileCollection::new();
        let stored = collection.insert(profile("alice@example.com", "alice")).unwrap();

        assert!(collection.remove(stored.id()).unwrap().is_some());
        assert!(collection.is_empty().unwrap());
        assert!(collection.insert(profile("alice@example.com", "alice")).is_ok());
    }
}
