// crates/profile/src/domain/entities/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{ProfileId, Star};

/// Note d'un évaluateur sur un profil. Au plus une par `reviewer_id` et par profil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    reviewer_id: ProfileId,
    star: Star,
    submitted_at: DateTime<Utc>,
}

impl Review {
    pub fn new(reviewer_id: ProfileId, star: Star) -> Self {
        Self {
            reviewer_id,
            star,
            submitted_at: Utc::now(),
        }
    }

    pub fn restore(reviewer_id: ProfileId, star: Star, submitted_at: DateTime<Utc>) -> Self {
        Self { reviewer_id, star, submitted_at }
    }

    pub fn reviewer_id(&self) -> &ProfileId { &self.reviewer_id }
    pub fn star(&self) -> Star { self.star }
    pub fn submitted_at(&self) -> DateTime<Utc> { self.submitted_at }
}

impl EntityMetadata for Review {
    fn entity_name() -> &'static str { "Review" }
}
