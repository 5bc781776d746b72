// crates/shared-kernel/src/infrastructure/bootstrap/telemetry.rs

use tracing_subscriber::EnvFilter;

/// Installe le subscriber `fmt` global (filtre via `RUST_LOG`, `info` par défaut).
/// Retourne `false` si un subscriber était déjà installé.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_a_no_op() {
        let _ = init_tracing();
        assert!(!init_tracing());
    }
}
