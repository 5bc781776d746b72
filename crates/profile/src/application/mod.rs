mod caller_identity;
mod profile_service;

pub mod create_profile_on_auth;
pub mod fetch_own_profile;
pub mod get_nearby_profiles;
pub mod get_profile_by_username;
pub mod submit_review;
pub mod update_own_profile;

pub use caller_identity::CallerIdentity;
pub use profile_service::{PROFILE_UPDATED, ProfileService, REVIEW_ADDED};
