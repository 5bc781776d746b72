mod profile_directory;
mod profile_directory_config;

pub use profile_directory::ProfileDirectory;
pub use profile_directory_config::{
    ENV_JITTER_SEED, ENV_RETRY_BACKOFF_MS, ENV_RETRY_MAX, ENV_RETRY_MAX_BACKOFF_MS, ProfileDirectoryConfig,
};
