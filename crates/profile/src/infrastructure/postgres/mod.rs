mod repositories;
mod rows;
mod utils;

pub use repositories::PostgresProfileRepository;
pub use utils::run_postgres_migrations;
