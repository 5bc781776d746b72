// crates/profile/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::{DomainError, Result};

pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("profile migrations failed: {}", e)))?;

    tracing::info!("profile postgres migrations applied");
    Ok(())
}
