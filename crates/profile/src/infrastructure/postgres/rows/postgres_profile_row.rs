// crates/profile/src/infrastructure/postgres/rows/postgres_profile_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::{Email, GeoPoint, Username};
use shared_kernel::errors::{Result, internal_err};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{Profile, Review};
use crate::domain::value_objects::{Bio, Contact, ContactHandle, Picture, ProfileId};

#[derive(FromRow, Debug)]
pub struct PostgresProfileRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub telegram: Option<String>,
    pub wickr: Option<String>,
    pub signal: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub bio: String,
    pub buyer: bool,
    pub seller: bool,
    pub picture: Option<String>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Profile> for PostgresProfileRow {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id().as_uuid(),
            username: p.username().as_str().to_string(),
            email: p.email().as_str().to_string(),
            telegram: p.contact().telegram().map(|h| h.as_str().to_string()),
            wickr: p.contact().wickr().map(|h| h.as_str().to_string()),
            signal: p.contact().signal().map(|h| h.as_str().to_string()),
            lat: p.location().map(GeoPoint::lat),
            lng: p.location().map(GeoPoint::lng),
            bio: p.bio().as_str().to_string(),
            buyer: p.is_buyer(),
            seller: p.is_seller(),
            picture: p.picture().map(|pic| pic.as_str().to_string()),
            version: p.version() as i64,
            created_at: p.created_at(),
            updated_at: p.updated_at(),
        }
    }
}

impl PostgresProfileRow {
    /// Les avis vivent dans `profile_reviews` et sont rattachés ici
    pub fn into_profile(self, reviews: Vec<Review>) -> Result<Profile> {
        // On convertit le i64 signé de la DB en u64 non-signé du domaine
        let version: u64 = self
            .version
            .try_into()
            .map_err(|_| internal_err("Negative version in database"))?;

        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::from_raw(lat, lng)),
            (None, None) => None,
            _ => return Err(internal_err(format!("Profile {} has a partial location", self.id))),
        };

        let email = Email::from_raw(self.email);
        let contact = Contact::new(email.clone())
            .with_telegram(self.telegram.map(ContactHandle::from_raw))
            .with_wickr(self.wickr.map(ContactHandle::from_raw))
            .with_signal(self.signal.map(ContactHandle::from_raw));

        Ok(Profile::builder(email, Username::from_raw(self.username))
            .with_id(ProfileId::from_uuid(self.id))
            .with_contact(contact)
            .with_location(location)
            .with_bio(Bio::from_raw(self.bio))
            .with_roles(self.buyer, self.seller)
            .with_picture(self.picture.map(Picture::from_raw))
            .with_reviews(reviews)
            .with_version(version)
            .with_timestamps(self.created_at, self.updated_at)
            .build())
    }
}
