mod get_profile_by_username_query;
mod get_profile_by_username_use_case;
mod profile_card_dto;

pub use get_profile_by_username_query::GetProfileByUsernameQuery;
pub use get_profile_by_username_use_case::GetProfileByUsernameUseCase;
pub use profile_card_dto::ProfileCardDto;
