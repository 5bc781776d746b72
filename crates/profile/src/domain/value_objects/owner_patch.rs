// crates/profile/src/domain/value_objects/owner_patch.rs

use shared_kernel::domain::value_objects::{GeoPoint, Username};

use crate::domain::value_objects::{Bio, ContactHandle, Picture};

/// Champs modifiables par le propriétaire via une mise à jour partielle.
/// `email` et `reviews` n'en font volontairement pas partie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerField {
    Username,
    Telegram,
    Wickr,
    Signal,
    Bio,
    Buyer,
    Seller,
    Location,
    Picture,
}

impl OwnerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Telegram => "contact.telegram",
            Self::Wickr => "contact.wickr",
            Self::Signal => "contact.signal",
            Self::Bio => "bio",
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Location => "location",
            Self::Picture => "picture",
        }
    }
}

/// Patch creux : seuls les champs à `Some` sont appliqués, les autres restent intacts.
/// Pour les handles de contact, `Some(None)` efface la valeur stockée.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerPatch {
    pub username: Option<Username>,
    pub telegram: Option<Option<ContactHandle>>,
    pub wickr: Option<Option<ContactHandle>>,
    pub signal: Option<Option<ContactHandle>>,
    pub bio: Option<Bio>,
    pub buyer: Option<bool>,
    pub seller: Option<bool>,
    pub location: Option<GeoPoint>,
    pub picture: Option<Picture>,
}

impl OwnerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: Username) -> Self { self.username = Some(username); self }
    pub fn with_telegram(mut self, handle: Option<ContactHandle>) -> Self { self.telegram = Some(handle); self }
    pub fn with_wickr(mut self, handle: Option<ContactHandle>) -> Self { self.wickr = Some(handle); self }
    pub fn with_signal(mut self, handle: Option<ContactHandle>) -> Self { self.signal = Some(handle); self }
    pub fn with_bio(mut self, bio: Bio) -> Self { self.bio = Some(bio); self }
    pub fn with_buyer(mut self, buyer: bool) -> Self { self.buyer = Some(buyer); self }
    pub fn with_seller(mut self, seller: bool) -> Self { self.seller = Some(seller); self }
    pub fn with_location(mut self, location: GeoPoint) -> Self { self.location = Some(location); self }
    pub fn with_picture(mut self, picture: Picture) -> Self { self.picture = Some(picture); self }

    /// Liste des champs présents (utile pour les logs et les requêtes SQL)
    pub fn fields(&self) -> Vec<OwnerField> {
        let presence = [
            (self.username.is_some(), OwnerField::Username),
            (self.telegram.is_some(), OwnerField::Telegram),
            (self.wickr.is_some(), OwnerField::Wickr),
            (self.signal.is_some(), OwnerField::Signal),
            (self.bio.is_some(), OwnerField::Bio),
            (self.buyer.is_some(), OwnerField::Buyer),
            (self.seller.is_some(), OwnerField::Seller),
            (self.location.is_some(), OwnerField::Location),
            (self.picture.is_some(), OwnerField::Picture),
        ];

        presence
            .into_iter()
            .filter_map(|(present, field)| present.then_some(field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
