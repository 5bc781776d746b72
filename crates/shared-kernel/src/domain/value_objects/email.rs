// crates/shared-kernel/src/domain/value_objects/email.rs

use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Adresse email issue de l'authentification externe.
/// Clé de rattachement entre la session et le profil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 254;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let email = Self(value.into().trim().to_lowercase());
        email.validate()?;
        Ok(email)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "email",
                reason: format!("Email must be at most {} characters", Self::MAX_LEN),
            });
        }

        if !EMAIL_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "email",
                reason: "Invalid email format".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Email {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
