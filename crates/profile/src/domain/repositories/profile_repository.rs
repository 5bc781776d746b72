// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Email, Username};
use shared_kernel::errors::Result;

use crate::domain::entities::{Profile, Review};
use crate::domain::value_objects::{BoundingBox, OwnerPatch, ProfileId};

/// Prédicat de parcours, traduisible par chaque implémentation (filtre mémoire ou clause SQL).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileFilter {
    All,
    /// Profils localisés strictement à l'intérieur de la fenêtre
    LocatedWithin(BoundingBox),
}

impl ProfileFilter {
    pub fn matches(&self, profile: &Profile) -> bool {
        match self {
            Self::All => true,
            Self::LocatedWithin(window) => profile.location().is_some_and(|loc| window.contains(loc)),
        }
    }
}

/// Stockage durable des profils.
///
/// Pas de remplacement de document entier : les deux primitives de mutation
/// (`update_owner_fields`, `upsert_review`) touchent des parties disjointes du profil
/// et sont chacune atomiques, de sorte qu'une édition du propriétaire et un avis
/// concurrent ne peuvent jamais s'écraser.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<Profile>>;

    /// `AlreadyExists` si l'email (ou le username) possède déjà un profil
    async fn create(&self, profile: &Profile) -> Result<Profile>;

    /// Applique atomiquement les seuls champs présents du patch.
    /// `NotFound` si aucun profil pour l'email, `AlreadyExists` si le username appartient à un autre profil.
    async fn update_owner_fields(&self, email: &Email, patch: &OwnerPatch) -> Result<Profile>;

    /// Retire l'avis existant du même évaluateur et ajoute le nouveau, en une seule étape indivisible.
    async fn upsert_review(&self, rated: &Username, review: &Review) -> Result<Profile>;

    async fn scan(&self, filter: &ProfileFilter) -> Result<Vec<Profile>>;

    async fn delete(&self, id: &ProfileId) -> Result<()>;
}
