// crates/shared-kernel/src/infrastructure/retry.rs

use std::time::Duration;
use rand::Rng;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff_ms: 10,
            max_backoff_ms: 200,
        }
    }
}

impl RetryConfig {
    fn backoff_for(&self, attempt: u32) -> Duration {
        // Exponentiel plafonné : min(2^attempt * base, max)
        let base = self
            .initial_backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(self.max_backoff_ms);

        // Jitter (entre 0 et 25% de la base) pour désynchroniser les écrivains concurrents
        let jitter = rand::rng().random_range(0..=base / 4);

        Duration::from_millis(base + jitter)
    }
}

/// Exécute une action avec une stratégie de retry (Exponential Backoff + Jitter).
/// Seuls les `ConcurrencyConflict` sont rejoués ; toute autre erreur remonte immédiatement.
/// L'épuisement du budget produit `TooManyConflicts`.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() => {
                if attempt >= config.max_retries {
                    tracing::warn!(attempts = attempt + 1, "concurrency conflict budget exhausted");
                    return Err(DomainError::TooManyConflicts(format!(
                        "Operation failed after {} retries due to persistent conflicts",
                        config.max_retries
                    )));
                }

                let backoff = config.backoff_for(attempt);
                tracing::warn!(
                    "🔄 Concurrency conflict (attempt {}/{}), retrying in {:?}...",
                    attempt + 1,
                    config.max_retries,
                    backoff
                );

                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
