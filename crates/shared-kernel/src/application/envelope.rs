// crates/shared-kernel/src/application/envelope.rs

use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};

/// Enveloppe de réponse exposée à la couche UI : `{"data": ...}` ou `{"error": {...}}`.
/// Aucun succès partiel n'est représentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope<T> {
    Data(T),
    Error(AppError),
}

impl<T> Envelope<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    pub fn into_result(self) -> AppResult<T> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(err) => Err(err),
        }
    }
}

impl<T> From<AppResult<T>> for Envelope<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(err) => Self::Error(err),
        }
    }
}
