// crates/shared-kernel/src/infrastructure/bootstrap/env.rs

use std::str::FromStr;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Valeur absente → défaut ; valeur présente mais invalide → erreur (jamais de repli silencieux).
pub fn parse_var<T: FromStr>(key: &str, raw: Option<String>, default: T) -> AppResult<T> {
    match raw {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::new(ErrorCode::Internal, format!("{key} has an invalid value: '{raw}'"))
        }),
        None => Ok(default),
    }
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    parse_var(key, std::env::var(key).ok(), default)
}
