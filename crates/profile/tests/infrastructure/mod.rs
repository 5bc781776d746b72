// crates/profile/tests/infrastructure/mod.rs

mod profile_repository_it;
mod profile_service_it;
