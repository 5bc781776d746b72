// crates/profile/src/application/submit_review/submit_review_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::Username;
use shared_kernel::errors::{DomainError, Result};

use crate::application::CallerIdentity;
use crate::application::submit_review::SubmitReviewCommand;
use crate::domain::entities::{Profile, Review};
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::Star;

pub const REVIEWER_MISSING: &str = "reviewer profile does not exist";
pub const RATED_MISSING: &str = "rated profile does not exist";

pub struct SubmitReviewUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl SubmitReviewUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    /// Un appelant peut évaluer n'importe quel profil, y compris le sien.
    #[tracing::instrument(name = "submit_review", skip_all, fields(rated = %command.username))]
    pub async fn execute(&self, command: SubmitReviewCommand) -> Result<Profile> {
        // 1. Identité
        let caller = CallerIdentity::require(command.caller.as_ref())?;

        // 2. Validation de la note et du username cible
        let star = command.star.ok_or_else(|| DomainError::Validation {
            field: "star",
            reason: "No review provided".into(),
        })?;
        let star = Star::try_new(star)?;
        let rated = Username::try_new(command.username.as_str())?;

        // 3. Le profil de l'évaluateur doit exister
        let reviewer = self
            .repo
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(|| DomainError::precondition(REVIEWER_MISSING))?;

        // 4. Le profil évalué doit exister (aucune écriture sinon)
        if self.repo.find_by_username(&rated).await?.is_none() {
            tracing::warn!("review rejected: rated profile missing");
            return Err(DomainError::precondition(RATED_MISSING));
        }

        // 5. Remplacement atomique de l'avis de cet évaluateur
        let review = Review::new(*reviewer.id(), star);
        let updated = self
            .repo
            .upsert_review(&rated, &review)
            .await
            .map_err(|e| if e.is_not_found() { DomainError::precondition(RATED_MISSING) } else { e })?;

        tracing::info!(
            reviewer_id = %reviewer.id(),
            profile_id = %updated.id(),
            star = star.value(),
            "review recorded"
        );
        Ok(updated)
    }
}
