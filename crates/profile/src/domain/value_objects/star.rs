// crates/profile/src/domain/value_objects/star.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Note attribuée par un évaluateur, toujours dans `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Star(u8);

impl Star {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn try_new(value: i64) -> Result<Self> {
        let star = u8::try_from(value).map(Self).map_err(|_| Self::out_of_range(value))?;
        star.validate()?;
        Ok(star)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Toutes les valeurs possibles, dans l'ordre croissant
    pub fn all() -> impl Iterator<Item = Star> {
        (Self::MIN..=Self::MAX).map(Star)
    }

    fn out_of_range(value: i64) -> DomainError {
        DomainError::Validation {
            field: "star",
            reason: format!("Star must be between {} and {}, got {}", Self::MIN, Self::MAX, value),
        }
    }
}

impl ValueObject for Star {
    fn validate(&self) -> Result<()> {
        if !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(Self::out_of_range(self.0 as i64));
        }
        Ok(())
    }
}

impl TryFrom<i64> for Star {
    type Error = DomainError;
    fn try_from(value: i64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Star> for u8 {
    fn from(star: Star) -> Self {
        star.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_one_to_five() {
        assert!(Star::try_new(0).is_err());
        assert!(Star::try_new(6).is_err());
        assert!(Star::try_new(-3).is_err());
        assert!(Star::try_new(300).is_err());
        assert_eq!(Star::all().map(|s| s.value()).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
