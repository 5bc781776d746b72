// crates/shared-kernel/src/domain/value_objects/username.rs

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// Nom public unique d'un profil.
/// À la création il provient du nom fourni par l'authentification externe,
/// d'où une validation permissive (espaces et majuscules acceptés).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 1;
    pub const MAX_LEN: usize = 64;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // 1. Normalisation (Trim + NFC)
        let normalized: String = raw.trim().nfc().collect();

        // 2. Validation
        let username = Self(normalized);
        username.validate()?;

        Ok(username)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Username {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "username",
                reason: format!("Username must be between {} and {} characters", Self::MIN_LEN, Self::MAX_LEN),
            });
        }

        if self.0.chars().any(char::is_control) {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Username cannot contain control characters".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Username {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
