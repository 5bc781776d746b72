mod get_nearby_profiles_query;
mod get_nearby_profiles_use_case;
mod get_nearby_profiles_use_case_test;

pub use get_nearby_profiles_query::GetNearbyProfilesQuery;
pub use get_nearby_profiles_use_case::GetNearbyProfilesUseCase;
