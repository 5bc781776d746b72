// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Identité absente (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 2. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 3. Entrée invalide (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::BadRequest,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },
            DomainError::Precondition { reason } => Self::new(ErrorCode::BadRequest, reason),

            // 4. Unicité ou course optimiste perdue (409) : l'appelant peut réessayer
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::Conflict,
                format!("{entity} with {field} '{value}' already exists"),
            ),
            DomainError::ConcurrencyConflict { reason } | DomainError::TooManyConflicts(reason) => {
                Self::new(ErrorCode::Conflict, reason)
            }

            // 5. Erreurs techniques (500) : détail masqué au client
            DomainError::Infrastructure(cause) | DomainError::Internal(cause) => {
                tracing::error!(%cause, "profile directory infrastructure error");
                Self::new(
                    ErrorCode::Internal,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
