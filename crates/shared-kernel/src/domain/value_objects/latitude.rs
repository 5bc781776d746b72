// crates/shared_kernel/src/domain/value_objects/latitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;

    pub fn try_new(val: f64) -> Result<Self> {
        let lat = Self(val);
        lat.validate()?;
        Ok(lat)
    }

    /// Reconstruction depuis le stockage (valeur déjà validée)
    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "lat",
                reason: "Range must be between -90 and 90".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<f64> for Latitude {
    type Error = DomainError;
    fn try_from(value: f64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> Self {
        lat.0
    }
}
