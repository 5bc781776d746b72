// crates/shared_kernel/src/domain/value_objects/geo_point.rs
use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::Result;

/// Paire (lat, lng) : les deux coordonnées sont toujours présentes ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    latitude: Latitude,
    #[serde(rename = "lng")]
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lng)?,
        })
    }

    /// Reconstruction depuis le stockage
    pub fn from_raw(lat: f64, lng: f64) -> Self {
        Self {
            latitude: Latitude::from_raw(lat),
            longitude: Longitude::from_raw(lng),
        }
    }

    pub fn lat(&self) -> f64 { self.latitude.value() }
    pub fn lng(&self) -> f64 { self.longitude.value() }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_and_non_finite_coordinates() {
        assert!(GeoPoint::try_new(90.5, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.1).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn serializes_as_lat_lng_pair() {
        let point = GeoPoint::try_new(48.8566, 2.3522).unwrap();
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 48.8566, "lng": 2.3522 }));
    }

    #[test]
    fn deserialization_enforces_ranges() {
        let bad = serde_json::from_value::<GeoPoint>(serde_json::json!({ "lat": 120.0, "lng": 0.0 }));
        assert!(bad.is_err());
    }
}
