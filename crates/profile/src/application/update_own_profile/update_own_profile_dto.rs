// crates/profile/src/application/update_own_profile/update_own_profile_dto.rs

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;
use shared_kernel::domain::value_objects::{GeoPoint, Username};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::value_objects::{Bio, ContactHandle, OwnerPatch};

/// Coordonnée telle qu'envoyée par le client : nombre ou chaîne ("48.8566").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn parse(&self, field: &'static str) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| DomainError::Validation {
                field,
                reason: format!("'{}' is not a number", s),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub lat: RawCoordinate,
    pub lng: RawCoordinate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDto {
    pub telegram: Option<String>,
    pub wickr: Option<String>,
    pub signal: Option<String>,
    // Jamais modifiable ici : accepté puis ignoré
    #[serde(default, rename = "email")]
    _email: Option<IgnoredAny>,
}

/// Corps d'une mise à jour par le propriétaire.
/// Les clés inconnues sont refusées ; `reviews`, `picture`, `id`, `_id`, `version`,
/// `createdAt`, `updatedAt` et `contact.email` sont acceptées puis ignorées
/// (un client renvoie souvent le document complet obtenu par lecture).
/// Une valeur `null` équivaut à une clé absente.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateOwnProfileDto {
    pub username: Option<String>,
    pub contact: Option<ContactDto>,
    pub bio: Option<String>,
    pub buyer: Option<bool>,
    pub seller: Option<bool>,
    pub lat: Option<RawCoordinate>,
    pub lng: Option<RawCoordinate>,
    pub location: Option<RawLocation>,

    #[serde(default, rename = "reviews")]
    _reviews: Option<IgnoredAny>,
    #[serde(default, rename = "picture")]
    _picture: Option<IgnoredAny>,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    #[serde(default, rename = "_id")]
    _legacy_id: Option<IgnoredAny>,
    #[serde(default, rename = "version")]
    _version: Option<IgnoredAny>,
    #[serde(default, rename = "createdAt")]
    _created_at: Option<IgnoredAny>,
    #[serde(default, rename = "updatedAt")]
    _updated_at: Option<IgnoredAny>,
}

impl UpdateOwnProfileDto {
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(DomainError::Validation {
                field: "profile",
                reason: "Profile update must be a JSON object".into(),
            });
        }

        serde_json::from_value(value).map_err(|e| DomainError::Validation {
            field: "profile",
            reason: e.to_string(),
        })
    }

    /// Patch validé. La position éventuelle est encore brute (non floutée).
    pub fn into_patch(self) -> Result<OwnerPatch> {
        let mut patch = OwnerPatch::new();

        if let Some(username) = self.username {
            patch = patch.with_username(Username::try_new(username)?);
        }

        if let Some(contact) = self.contact {
            if let Some(handle) = contact.telegram {
                patch = patch.with_telegram(ContactHandle::parse(handle)?);
            }
            if let Some(handle) = contact.wickr {
                patch = patch.with_wickr(ContactHandle::parse(handle)?);
            }
            if let Some(handle) = contact.signal {
                patch = patch.with_signal(ContactHandle::parse(handle)?);
            }
        }

        if let Some(bio) = self.bio {
            patch = patch.with_bio(Bio::try_new(bio)?);
        }
        if let Some(buyer) = self.buyer {
            patch = patch.with_buyer(buyer);
        }
        if let Some(seller) = self.seller {
            patch = patch.with_seller(seller);
        }

        // lat et lng vont toujours ensemble
        let raw = match (self.lat, self.lng, self.location) {
            (None, None, None) => None,
            (Some(lat), Some(lng), None) | (None, None, Some(RawLocation { lat, lng })) => Some((lat, lng)),
            (Some(_), None, _) | (None, Some(_), _) => {
                return Err(DomainError::Validation {
                    field: "location",
                    reason: "lat and lng must be provided together".into(),
                });
            }
            (Some(_), Some(_), Some(_)) => {
                return Err(DomainError::Validation {
                    field: "location",
                    reason: "Provide either lat/lng or location, not both".into(),
                });
            }
        };

        if let Some((lat, lng)) = raw {
            let point = GeoPoint::try_new(lat.parse("lat")?, lng.parse("lng")?)?;
            patch = patch.with_location(point);
        }

        Ok(patch)
    }
}
