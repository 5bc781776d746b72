// crates/profile/src/application/update_own_profile/update_own_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::CallerIdentity;
use crate::application::update_own_profile::{UpdateOwnProfileCommand, UpdateOwnProfileDto};
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::services::LocationPrivacyFilter;
use crate::domain::value_objects::{OwnerPatch, Picture};

pub struct UpdateOwnProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    privacy: Arc<LocationPrivacyFilter>,
}

impl UpdateOwnProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>, privacy: Arc<LocationPrivacyFilter>) -> Self {
        Self { repo, privacy }
    }

    #[tracing::instrument(name = "update_own_profile", skip_all)]
    pub async fn execute(&self, command: UpdateOwnProfileCommand) -> Result<Profile> {
        // 1. Identité
        let caller = CallerIdentity::require(command.caller.as_ref())?;

        // 2. Validation complète avant tout accès au stockage
        let mut patch = UpdateOwnProfileDto::from_value(command.changes)
            .and_then(UpdateOwnProfileDto::into_patch)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected owner update"))?;

        // 3. Profil courant, lu seulement si la position ou un rôle isolé en dépendent
        let current = if patch.location.is_some() || patch.buyer.is_some() != patch.seller.is_some() {
            Some(
                self.repo
                    .find_by_email(&caller.email)
                    .await?
                    .ok_or_not_found(caller.email.as_str())?,
            )
        } else {
            None
        };

        // 4. Floutage d'une coordonnée brute uniquement : la position déjà stockée
        //    (renvoyée telle quelle avec le document complet) n'est jamais refloutée
        if let Some(raw) = patch.location {
            patch.location = match current.as_ref().and_then(Profile::location) {
                Some(stored) if *stored == raw => None,
                _ => Some(self.privacy.jitter(&raw)),
            };
        }

        // 5. Marqueur de carte dérivé des rôles effectifs
        Self::derive_marker(current.as_ref(), &mut patch);

        // 6. Mise à jour atomique des seuls champs présents
        let updated = self.repo.update_owner_fields(&caller.email, &patch).await?;

        tracing::info!(profile_id = %updated.id(), fields = ?patch.fields(), "owner fields updated");
        Ok(updated)
    }

    /// Aucun rôle actif : l'image existante est conservée, y compris un ancien marqueur.
    fn derive_marker(current: Option<&Profile>, patch: &mut OwnerPatch) {
        if patch.buyer.is_none() && patch.seller.is_none() {
            return;
        }
        let buyer = patch.buyer.or(current.map(Profile::is_buyer)).unwrap_or(false);
        let seller = patch.seller.or(current.map(Profile::is_seller)).unwrap_or(false);

        if let Some(marker) = Picture::marker_for(buyer, seller) {
            patch.picture = Some(marker);
        }
    }
}
