// crates/profile/src/infrastructure/bootstrap/profile_directory.rs

use std::sync::Arc;

use crate::application::ProfileService;
use crate::domain::repositories::ProfileRepository;
use crate::domain::services::LocationPrivacyFilter;
use crate::infrastructure::bootstrap::ProfileDirectoryConfig;
use crate::infrastructure::memory::InMemoryProfileRepository;

/// Assemblage complet : stockage + façade de service.
/// Le dépôt reste accessible pour les collaborateurs externes (suppression de compte).
pub struct ProfileDirectory {
    service: Arc<ProfileService>,
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileDirectory {
    pub fn new(repository: Arc<dyn ProfileRepository>, config: ProfileDirectoryConfig) -> Self {
        let privacy = Arc::new(LocationPrivacyFilter::new(config.jitter_seed));
        let service = Arc::new(ProfileService::new(repository.clone(), privacy));
        Self { service, repository }
    }

    pub fn in_memory(config: ProfileDirectoryConfig) -> Self {
        tracing::info!(max_retries = config.retry.max_retries, "profile directory on in-memory store");
        Self::new(Arc::new(InMemoryProfileRepository::new(config.retry)), config)
    }

    #[cfg(feature = "postgres")]
    pub async fn postgres(
        config: ProfileDirectoryConfig,
        context: &shared_kernel::infrastructure::postgres::factories::PostgresContext,
    ) -> shared_kernel::errors::AppResult<Self> {
        use crate::infrastructure::postgres::{PostgresProfileRepository, run_postgres_migrations};

        let pool = context.pool();
        run_postgres_migrations(&pool).await?;

        tracing::info!("profile directory on postgres store");
        Ok(Self::new(Arc::new(PostgresProfileRepository::new(pool)), config))
    }

    pub fn service(&self) -> Arc<ProfileService> {
        self.service.clone()
    }

    pub fn repository(&self) -> Arc<dyn ProfileRepository> {
        self.repository.clone()
    }
}
