// crates/profile/src/application/get_nearby_profiles/get_nearby_profiles_use_case.rs

use shared_kernel::errors::{DomainError, Result};

use crate::application::get_nearby_profiles::GetNearbyProfilesQuery;
use crate::domain::entities::Profile;
use crate::domain::services::GeoQueryEngine;

pub struct GetNearbyProfilesUseCase {
    engine: GeoQueryEngine,
}

impl GetNearbyProfilesUseCase {
    pub fn new(engine: GeoQueryEngine) -> Self {
        Self { engine }
    }

    pub async fn execute(&self, query: GetNearbyProfilesQuery) -> Result<Vec<Profile>> {
        // 1. Les deux coordonnées sont obligatoires
        let (Some(raw_lat), Some(raw_lng)) = (query.lat.as_deref(), query.lng.as_deref()) else {
            return Err(DomainError::Validation {
                field: "coordinates",
                reason: "Coordinates not provided".into(),
            });
        };

        // 2. Nombres finis uniquement (pas de contrôle de plage : la fenêtre déborde simplement)
        let lat = parse_finite("lat", raw_lat)?;
        let lng = parse_finite("lng", raw_lng)?;

        // 3. Recherche par fenêtre
        self.engine.nearby(lat, lng).await
    }
}

fn parse_finite(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DomainError::Validation {
            field,
            reason: format!("'{}' is not a finite number", raw),
        }),
    }
}
