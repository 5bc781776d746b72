// crates/profile/src/domain/value_objects/contact.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{Email, ValueObject};
use shared_kernel::errors::{DomainError, Result};

/// Identifiant sur une messagerie tierce (Telegram, Wickr, Signal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactHandle(String);

impl ContactHandle {
    pub const MAX_LEN: usize = 128;

    /// Une chaîne vide (après trim) signifie "pas de handle" : `Ok(None)`.
    pub fn parse(value: impl Into<String>) -> Result<Option<Self>> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let handle = Self(trimmed.to_string());
        handle.validate()?;
        Ok(Some(handle))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ContactHandle {
    fn validate(&self) -> Result<()> {
        if self.0.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "contact",
                reason: format!("Contact handle must be at most {} characters", Self::MAX_LEN),
            });
        }
        if self.0.chars().any(char::is_control) {
            return Err(DomainError::Validation {
                field: "contact",
                reason: "Contact handle contains control characters".into(),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for ContactHandle {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)?.ok_or_else(|| DomainError::Validation {
            field: "contact",
            reason: "Contact handle cannot be empty".into(),
        })
    }
}

impl From<ContactHandle> for String {
    fn from(handle: ContactHandle) -> Self {
        handle.0
    }
}

/// Moyens de contact d'un profil.
/// `email` vient de l'authentification externe et n'est jamais modifiable par le propriétaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    telegram: Option<ContactHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wickr: Option<ContactHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signal: Option<ContactHandle>,
}

impl Contact {
    pub fn new(email: Email) -> Self {
        Self {
            email,
            telegram: None,
            wickr: None,
            signal: None,
        }
    }

    // --- Getters ---

    pub fn email(&self) -> &Email { &self.email }
    pub fn telegram(&self) -> Option<&ContactHandle> { self.telegram.as_ref() }
    pub fn wickr(&self) -> Option<&ContactHandle> { self.wickr.as_ref() }
    pub fn signal(&self) -> Option<&ContactHandle> { self.signal.as_ref() }

    // --- Fluent Setters ---

    pub fn with_telegram(mut self, handle: Option<ContactHandle>) -> Self { self.telegram = handle; self }
    pub fn with_wickr(mut self, handle: Option<ContactHandle>) -> Self { self.wickr = handle; self }
    pub fn with_signal(mut self, handle: Option<ContactHandle>) -> Self { self.signal = handle; self }

    pub(crate) fn set_telegram(&mut self, handle: Option<ContactHandle>) { self.telegram = handle; }
    pub(crate) fn set_wickr(&mut self, handle: Option<ContactHandle>) { self.wickr = handle; }
    pub(crate) fn set_signal(&mut self, handle: Option<ContactHandle>) { self.signal = handle; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_handle_means_cleared() {
        assert_eq!(ContactHandle::parse("   ").unwrap(), None);
        assert_eq!(
            ContactHandle::parse(" @alice ").unwrap(),
            Some(ContactHandle::from_raw("@alice"))
        );
    }

    #[test]
    fn empty_handles_are_omitted_from_json() {
        let contact = Contact::new(Email::try_new("alice@example.com").unwrap())
            .with_signal(ContactHandle::parse("+33600000000").unwrap());
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "alice@example.com", "signal": "+33600000000" }));
    }
}
