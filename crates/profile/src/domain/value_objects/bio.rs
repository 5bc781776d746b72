// crates/profile/src/domain/value_objects/bio.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Texte libre du propriétaire (limites d'achat/vente, prix, disponibilités).
/// Pas de longueur maximale : seule la couche transport la borne.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Bio(String);

impl Bio {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let bio = Self(raw.trim_end().to_string());
        bio.validate()?;
        Ok(bio)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for Bio {
    fn validate(&self) -> Result<()> {
        // Les sauts de ligne et tabulations sont autorisés, pas les autres caractères de contrôle
        if self.0.chars().any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t')) {
            return Err(DomainError::Validation {
                field: "bio",
                reason: "Bio contains invalid control characters".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Bio {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Bio> for String {
    fn from(bio: Bio) -> Self {
        bio.0
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
