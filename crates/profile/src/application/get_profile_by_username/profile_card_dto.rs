// crates/profile/src/application/get_profile_by_username/profile_card_dto.rs

use serde::Serialize;
use crate::domain::entities::Profile;
use crate::domain::value_objects::RatingSummary;

/// Vue publique d'un profil : le document et son résumé de notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCardDto {
    pub profile: Profile,
    pub rating: RatingSummary,
    pub rating_label: String,
    pub stars: u8,
}

impl From<Profile> for ProfileCardDto {
    fn from(profile: Profile) -> Self {
        let rating = profile.rating_summary();
        Self {
            rating_label: rating.label(),
            stars: rating.rounded_stars(),
            rating,
            profile,
        }
    }
}
