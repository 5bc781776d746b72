// crates/profile/src/domain/value_objects/picture.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Référence d'avatar / marqueur de carte. Attribuée par le système uniquement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Picture(String);

impl Picture {
    pub const BUYER_MARKER: &'static str = "/markers/buyer.png";
    pub const SELLER_MARKER: &'static str = "/markers/seller.png";
    pub const BUYER_SELLER_MARKER: &'static str = "/markers/buyer-seller.png";

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Marqueur dérivé des rôles effectifs. `None` : aucun rôle, l'avatar existant est conservé.
    pub fn marker_for(buyer: bool, seller: bool) -> Option<Self> {
        match (buyer, seller) {
            (true, true) => Some(Self::from_raw(Self::BUYER_SELLER_MARKER)),
            (true, false) => Some(Self::from_raw(Self::BUYER_MARKER)),
            (false, true) => Some(Self::from_raw(Self::SELLER_MARKER)),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
