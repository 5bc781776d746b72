mod fetch_own_profile_query;
mod fetch_own_profile_use_case;

pub use fetch_own_profile_query::FetchOwnProfileQuery;
pub use fetch_own_profile_use_case::FetchOwnProfileUseCase;
