//! Application error type.

use serde_json::Value;
use thiserror::Error;

/// Error type shared by the repository and service layers.
///
/// Not-found conditions are modeled as absence of value, not as an error;
/// this type covers argument validation and database failures. It never
/// flows into an HTTP response: the service absorbs every repository
/// failure before it reaches a handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<sqlx::Error> for AppError {
    /// All database failures are internal errors. Uniqueness violations on
    /// insert never reach this impl; the repository maps them to a zero row
    /// count before they become errors.
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(
            "Database error",
            serde_json::json!({ "source": e.to_string() }),
        )
    }
}
