mod update_own_profile_command;
mod update_own_profile_dto;
mod update_own_profile_use_case;

pub use update_own_profile_command::UpdateOwnProfileCommand;
pub use update_own_profile_dto::{ContactDto, RawCoordinate, RawLocation, UpdateOwnProfileDto};
pub use update_own_profile_use_case::UpdateOwnProfileUseCase;
