// crates/profile/src/domain/services/review_aggregator.rs

use std::collections::BTreeMap;

use crate::domain::entities::Review;
use crate::domain::value_objects::{RatingSummary, Star};

/// Fonctions pures sur l'ensemble des avis d'un profil (aucune I/O).
pub struct ReviewAggregator;

impl ReviewAggregator {
    /// Retire toute entrée du même évaluateur puis ajoute le nouvel avis.
    pub fn dedupe(mut reviews: Vec<Review>, new_review: Review) -> Vec<Review> {
        reviews.retain(|r| r.reviewer_id() != new_review.reviewer_id());
        reviews.push(new_review);
        reviews
    }

    /// Moyenne arithmétique, effectif et distribution 1..5.
    /// Sans avis, la moyenne vaut 0 (jamais de division par zéro).
    pub fn summarize(reviews: &[Review]) -> RatingSummary {
        let mut distribution: BTreeMap<u8, usize> = Star::all().map(|s| (s.value(), 0)).collect();

        let mut total: u64 = 0;
        for review in reviews {
            let star = review.star().value();
            total += u64::from(star);
            *distribution.entry(star).or_insert(0) += 1;
        }

        let count = reviews.len();
        let average = if count == 0 { 0.0 } else { total as f64 / count as f64 };

        RatingSummary { average, count, distribution }
    }
}
