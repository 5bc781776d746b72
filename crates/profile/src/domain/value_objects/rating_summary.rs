// crates/profile/src/domain/value_objects/rating_summary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistiques agrégées d'un ensemble d'avis.
/// `distribution` contient toujours les clés 1 à 5, même à zéro, pour un rendu stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
    pub distribution: BTreeMap<u8, usize>,
}

impl RatingSummary {
    /// Case d'étoiles affichée sur la carte : partie entière de la moyenne, 0 sans avis.
    pub fn rounded_stars(&self) -> u8 {
        if self.count == 0 {
            return 0;
        }
        self.average.floor().clamp(0.0, 5.0) as u8
    }

    pub fn label(&self) -> String {
        if self.count == 0 {
            return "no ratings yet".to_string();
        }
        let average = (self.average * 100.0).round() / 100.0;
        format!("{} stars ({} reviews)", average, self.count)
    }
}
