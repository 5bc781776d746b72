mod postgres_profile_repository;

pub use postgres_profile_repository::PostgresProfileRepository;
