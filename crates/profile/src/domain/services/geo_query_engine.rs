// crates/profile/src/domain/services/geo_query_engine.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::domain::entities::Profile;
use crate::domain::repositories::{ProfileFilter, ProfileRepository};
use crate::domain::value_objects::BoundingBox;

/// Recherche de proximité par fenêtre ±1°, construite uniquement sur le chemin de lecture.
/// L'ordre des résultats n'est pas défini ; un éventuel tri par distance relève de la présentation.
pub struct GeoQueryEngine {
    repo: Arc<dyn ProfileRepository>,
}

impl GeoQueryEngine {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn nearby(&self, lat: f64, lng: f64) -> Result<Vec<Profile>> {
        let filter = ProfileFilter::LocatedWithin(BoundingBox::around(lat, lng));
        let profiles = self.repo.scan(&filter).await?;

        tracing::debug!(lat, lng, found = profiles.len(), "nearby scan completed");
        Ok(profiles)
    }
}
