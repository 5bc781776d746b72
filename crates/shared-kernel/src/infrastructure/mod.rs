// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "postgres")]
pub mod postgres;

pub mod bootstrap;
mod retry;

pub use retry::{RetryConfig, with_retry};
