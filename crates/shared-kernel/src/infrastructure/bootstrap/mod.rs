mod env;
mod telemetry;

pub use env::{env_or, parse_var};
pub use telemetry::init_tracing;
