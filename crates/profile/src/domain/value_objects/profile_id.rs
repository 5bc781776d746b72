// crates/profile/src/domain/value_objects/profile_id.rs

use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant stable d'un profil (UUID v7), immuable après création.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl AsRef<str>) -> Result<Self> {
        Self::from_str(id.as_ref())
    }
}

impl Identifier for ProfileId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ProfileId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        match Uuid::parse_str(s.trim()) {
            Ok(uuid) if !uuid.is_nil() => Ok(Self(uuid)),
            _ => Err(DomainError::Validation {
                field: "id",
                reason: format!("'{}' is not a valid profile id", s),
            }),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityMetadata for ProfileId {
    fn entity_name() -> &'static str {
        "ProfileId"
    }
}
