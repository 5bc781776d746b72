// crates/profile/src/application/get_nearby_profiles/get_nearby_profiles_query.rs

use serde::{Deserialize, Serialize};

/// Coordonnées brutes issues des paramètres de requête.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetNearbyProfilesQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl GetNearbyProfilesQuery {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat.to_string()),
            lng: Some(lng.to_string()),
        }
    }
}
