// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod factories;
mod mappers;

pub use mappers::SqlxErrorExt;
