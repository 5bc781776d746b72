mod create_profile_on_auth_command;
mod create_profile_on_auth_use_case;

pub use create_profile_on_auth_command::CreateProfileOnAuthCommand;
pub use create_profile_on_auth_use_case::CreateProfileOnAuthUseCase;
