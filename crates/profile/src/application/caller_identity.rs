// crates/profile/src/application/caller_identity.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Email;
use shared_kernel::errors::{DomainError, Result};

/// Identité déjà authentifiée, fournie par la session externe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub email: Email,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl CallerIdentity {
    pub fn new(email: Email) -> Self {
        Self { email, name: None, picture: None }
    }

    pub fn try_new(email: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Email::try_new(email)?))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Premier contrôle de toute opération protégée
    pub fn require(caller: Option<&CallerIdentity>) -> Result<&CallerIdentity> {
        caller.ok_or_else(DomainError::unauthorized)
    }

    /// Nom public proposé à la création : nom de la session, sinon partie locale de l'email
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.as_str().split('@').next().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_identity_is_unauthorized() {
        let err = CallerIdentity::require(None).unwrap_err();
        assert_eq!(err, DomainError::unauthorized());
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let anonymous = CallerIdentity::try_new("carol@example.com").unwrap();
        assert_eq!(anonymous.display_name(), "carol");
        assert_eq!(anonymous.clone().with_name("  ").display_name(), "carol");
        assert_eq!(anonymous.with_name("Carol D.").display_name(), "Carol D.");
    }
}
