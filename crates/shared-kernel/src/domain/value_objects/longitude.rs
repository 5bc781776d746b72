// crates/shared_kernel/src/domain/value_objects/longitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;

    pub fn try_new(val: f64) -> Result<Self> {
        let lng = Self(val);
        lng.validate()?;
        Ok(lng)
    }

    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Longitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "lng",
                reason: "Range must be between -180 and 180".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<f64> for Longitude {
    type Error = DomainError;
    fn try_from(value: f64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Longitude> for f64 {
    fn from(lng: Longitude) -> Self {
        lng.0
    }
}
