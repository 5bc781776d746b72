// crates/profile/src/infrastructure/bootstrap/profile_directory_config.rs

use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::RetryConfig;
use shared_kernel::infrastructure::bootstrap::parse_var;

pub const ENV_RETRY_MAX: &str = "PROFILE_RETRY_MAX";
pub const ENV_RETRY_BACKOFF_MS: &str = "PROFILE_RETRY_BACKOFF_MS";
pub const ENV_RETRY_MAX_BACKOFF_MS: &str = "PROFILE_RETRY_MAX_BACKOFF_MS";
pub const ENV_JITTER_SEED: &str = "PROFILE_JITTER_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileDirectoryConfig {
    /// Budget de la boucle optimiste (stockage sans mise à jour partielle native)
    pub retry: RetryConfig,
    /// Graine du floutage de position ; `None` : entropie du système
    pub jitter_seed: Option<u64>,
}

impl ProfileDirectoryConfig {
    /// Charge la configuration depuis l'environnement (`PROFILE_*`)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = RetryConfig::default();

        let retry = RetryConfig {
            max_retries: parse_var(ENV_RETRY_MAX, lookup(ENV_RETRY_MAX), defaults.max_retries)?,
            initial_backoff_ms: parse_var(
                ENV_RETRY_BACKOFF_MS,
                lookup(ENV_RETRY_BACKOFF_MS),
                defaults.initial_backoff_ms,
            )?,
            max_backoff_ms: parse_var(
                ENV_RETRY_MAX_BACKOFF_MS,
                lookup(ENV_RETRY_MAX_BACKOFF_MS),
                defaults.max_backoff_ms,
            )?,
        };

        let jitter_seed = match lookup(ENV_JITTER_SEED) {
            Some(raw) => Some(parse_var(ENV_JITTER_SEED, Some(raw), 0u64)?),
            None => None,
        };

        Ok(Self { retry, jitter_seed })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }
}
