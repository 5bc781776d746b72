// crates/profile/src/domain/builders/profile_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{Email, GeoPoint, Username};

use crate::domain::entities::{Profile, Review};
use crate::domain::value_objects::{Bio, Contact, Picture, ProfileId};

pub struct ProfileBuilder {
    id: ProfileId,
    username: Username,
    contact: Contact,
    location: Option<GeoPoint>,
    bio: Bio,
    buyer: bool,
    seller: bool,
    picture: Option<Picture>,
    reviews: Vec<Review>,
    version: u64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProfileBuilder {
    /// Chemin 1 : CREATION (premier passage par l'authentification externe)
    pub fn new(email: Email, username: Username) -> Self {
        Self {
            id: ProfileId::new(),
            username,
            contact: Contact::new(email),
            location: None,
            bio: Bio::default(),
            buyer: false,
            seller: false,
            picture: None,
            reviews: Vec::new(),
            version: 1,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: ProfileId) -> Self { self.id = id; self }
    pub fn with_contact(mut self, contact: Contact) -> Self { self.contact = contact; self }
    pub fn with_location(mut self, location: Option<GeoPoint>) -> Self { self.location = location; self }
    pub fn with_bio(mut self, bio: Bio) -> Self { self.bio = bio; self }
    pub fn with_roles(mut self, buyer: bool, seller: bool) -> Self { self.buyer = buyer; self.seller = seller; self }
    pub fn with_picture(mut self, picture: Option<Picture>) -> Self { self.picture = picture; self }
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self { self.reviews = reviews; self }

    /// Chemin 2 : RESTAURATION (Infrastructure / Repository)
    pub fn with_version(mut self, version: u64) -> Self { self.version = version; self }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Profile {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);

        Profile {
            id: self.id,
            username: self.username,
            contact: self.contact,
            location: self.location,
            bio: self.bio,
            buyer: self.buyer,
            seller: self.seller,
            picture: self.picture,
            reviews: self.reviews,
            version: self.version,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}
