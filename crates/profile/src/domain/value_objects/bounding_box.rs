// crates/profile/src/domain/value_objects/bounding_box.rs

use shared_kernel::domain::value_objects::GeoPoint;

/// Fenêtre ouverte `]lat-d, lat+d[ × ]lng-d, lng+d[`.
/// Approximation volontaire : pas de rayon circulaire, pas de compression des longitudes
/// en haute latitude, pas de passage de l'antiméridien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub const NEARBY_WINDOW_DEGREES: f64 = 1.0;

    pub fn around(lat: f64, lng: f64) -> Self {
        Self::with_half_width(lat, lng, Self::NEARBY_WINDOW_DEGREES)
    }

    pub fn with_half_width(lat: f64, lng: f64, degrees: f64) -> Self {
        Self {
            min_lat: lat - degrees,
            max_lat: lat + degrees,
            min_lng: lng - degrees,
            max_lng: lng + degrees,
        }
    }

    /// Bornes strictes des deux côtés
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.min_lat < point.lat()
            && point.lat() < self.max_lat
            && self.min_lng < point.lng()
            && point.lng() < self.max_lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_excluded() {
        let window = BoundingBox::around(0.0, 0.0);
        assert!(window.contains(&GeoPoint::try_new(0.5, 0.5).unwrap()));
        assert!(window.contains(&GeoPoint::try_new(-0.99, 0.99).unwrap()));
        assert!(!window.contains(&GeoPoint::try_new(1.0, 0.0).unwrap()));
        assert!(!window.contains(&GeoPoint::try_new(0.0, -1.0).unwrap()));
        assert!(!window.contains(&GeoPoint::try_new(2.0, 2.0).unwrap()));
    }

    #[test]
    fn corners_are_over_returned() {
        // Le coin (0.99, 0.99) est à ~155 km du centre mais reste dans la fenêtre
        let window = BoundingBox::around(0.0, 0.0);
        assert!(window.contains(&GeoPoint::try_new(0.99, 0.99).unwrap()));
    }
}
