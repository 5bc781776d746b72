// crates/profile/src/domain/entities/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Email, GeoPoint, Username};

use crate::domain::builders::ProfileBuilder;
use crate::domain::entities::Review;
use crate::domain::services::ReviewAggregator;
use crate::domain::value_objects::{Bio, Contact, OwnerPatch, Picture, ProfileId, RatingSummary};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub(crate) id: ProfileId,
    pub(crate) username: Username,
    pub(crate) contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<GeoPoint>,
    pub(crate) bio: Bio,
    pub(crate) buyer: bool,
    pub(crate) seller: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) picture: Option<Picture>,
    pub(crate) reviews: Vec<Review>,
    pub(crate) version: u64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn builder(email: Email, username: Username) -> ProfileBuilder {
        ProfileBuilder::new(email, username)
    }

    // --- Getters ---

    pub fn id(&self) -> &ProfileId { &self.id }
    pub fn username(&self) -> &Username { &self.username }
    pub fn contact(&self) -> &Contact { &self.contact }
    pub fn email(&self) -> &Email { self.contact.email() }
    pub fn location(&self) -> Option<&GeoPoint> { self.location.as_ref() }
    pub fn bio(&self) -> &Bio { &self.bio }
    pub fn is_buyer(&self) -> bool { self.buyer }
    pub fn is_seller(&self) -> bool { self.seller }
    pub fn picture(&self) -> Option<&Picture> { self.picture.as_ref() }
    pub fn reviews(&self) -> &[Review] { &self.reviews }
    pub fn version(&self) -> u64 { self.version }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    pub fn rating_summary(&self) -> RatingSummary {
        ReviewAggregator::summarize(&self.reviews)
    }

    /// Applique les seuls champs présents dans le patch.
    /// Retourne `false` si rien ne change (pas d'écriture nécessaire).
    pub fn apply_owner_patch(&mut self, patch: &OwnerPatch) -> bool {
        let mut changed = false;

        if let Some(username) = &patch.username {
            changed |= replace(&mut self.username, username.clone());
        }
        if let Some(handle) = &patch.telegram {
            if self.contact.telegram() != handle.as_ref() {
                self.contact.set_telegram(handle.clone());
                changed = true;
            }
        }
        if let Some(handle) = &patch.wickr {
            if self.contact.wickr() != handle.as_ref() {
                self.contact.set_wickr(handle.clone());
                changed = true;
            }
        }
        if let Some(handle) = &patch.signal {
            if self.contact.signal() != handle.as_ref() {
                self.contact.set_signal(handle.clone());
                changed = true;
            }
        }
        if let Some(bio) = &patch.bio {
            changed |= replace(&mut self.bio, bio.clone());
        }
        if let Some(buyer) = patch.buyer {
            changed |= replace(&mut self.buyer, buyer);
        }
        if let Some(seller) = patch.seller {
            changed |= replace(&mut self.seller, seller);
        }
        if let Some(location) = patch.location {
            changed |= replace(&mut self.location, Some(location));
        }
        if let Some(picture) = &patch.picture {
            changed |= replace(&mut self.picture, Some(picture.clone()));
        }

        if changed {
            self.apply_change();
        }
        changed
    }

    /// Remplace l'avis existant du même évaluateur, sinon ajoute.
    pub fn upsert_review(&mut self, review: Review) {
        let reviews = std::mem::take(&mut self.reviews);
        self.reviews = ReviewAggregator::dedupe(reviews, review);
        self.apply_change();
    }

    pub fn review_by(&self, reviewer_id: &ProfileId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.reviewer_id() == reviewer_id)
    }

    // Helpers
    fn apply_change(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str { "Profile" }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "profiles_username_key" => "username",
            "profiles_email_key" => "email",
            _ => "unique_constraint",
        }
    }
}
