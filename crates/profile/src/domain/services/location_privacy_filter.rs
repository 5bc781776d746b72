// crates/profile/src/domain/services/location_privacy_filter.rs

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_kernel::domain::value_objects::{GeoPoint, Latitude, Longitude};

/// Décale une coordonnée brute avant toute persistance.
/// Contrôle de confidentialité (et anti-chevauchement des marqueurs), pas de sécurité :
/// des échantillons répétés restent corrélables.
pub struct LocationPrivacyFilter {
    rng: Mutex<StdRng>,
}

impl LocationPrivacyFilter {
    /// Décalage minimal et maximal (exclu), en dix-millièmes de degré
    const MIN_OFFSET_STEPS: u32 = 10;
    const MAX_OFFSET_STEPS: u32 = 50;
    const STEPS_PER_DEGREE: f64 = 10_000.0;

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng: Mutex::new(rng) }
    }

    /// À appeler une seule fois par coordonnée brute reçue d'un client,
    /// jamais sur une position déjà stockée.
    pub fn jitter(&self, point: &GeoPoint) -> GeoPoint {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Self::jitter_with(&mut *rng, point)
    }

    /// Version pure : source aléatoire injectée.
    pub fn jitter_with<R: Rng>(rng: &mut R, point: &GeoPoint) -> GeoPoint {
        let lat = Self::shift(rng, point.lat(), Latitude::MIN, Latitude::MAX);
        let lng = Self::shift(rng, point.lng(), Longitude::MIN, Longitude::MAX);
        GeoPoint::from_raw(lat, lng)
    }

    fn shift<R: Rng>(rng: &mut R, value: f64, min: f64, max: f64) -> f64 {
        // Amplitude dans [0.0010, 0.0049], déjà arrondie à 4 décimales
        let steps = rng.random_range(Self::MIN_OFFSET_STEPS..Self::MAX_OFFSET_STEPS);
        let offset = f64::from(steps) / Self::STEPS_PER_DEGREE;
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let mut shifted = round4(value + sign * offset);
        // Près d'un pôle ou de l'antiméridien, on part dans l'autre sens
        if !(min..=max).contains(&shifted) {
            shifted = round4(value - sign * offset);
        }
        shifted
    }
}

fn round4(value: f64) -> f64 {
    (value * LocationPrivacyFilter::STEPS_PER_DEGREE).round() / LocationPrivacyFilter::STEPS_PER_DEGREE
}
