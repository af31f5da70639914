use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// The one message callers of the creation endpoint ever see on failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Invalid data or server error.";

#[derive(Error, Debug)]
pub enum InvoiceApiError {
    #[error("validation error: {errors:?}")]
    Validation { errors: Vec<String> },

    #[error("database error: {message}")]
    Database { message: String },

    #[error("invoice not found")]
    NotFound,

    #[error("internal server error: {message}")]
    Internal { message: String },
}

// ============================================================================
// HTTP RESPONSE CONVERSION
// ============================================================================

impl IntoResponse for InvoiceApiError {
    fn into_response(self) -> Response {
        match self {
            InvoiceApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Invoice not found" })),
            )
                .into_response(),

            // Validation and storage failures share one observable outcome.
            // Only the server log tells them apart.
            InvoiceApiError::Validation { .. }
            | InvoiceApiError::Database { .. }
            | InvoiceApiError::Internal { .. } => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": GENERIC_ERROR_MESSAGE })),
            )
                .into_response(),
        }
    }
}

impl From<sqlx::Error> for InvoiceApiError {
    fn from(err: sqlx::Error) -> Self {
        InvoiceApiError::Database {
            message: format!("Database error: {}", err),
        }
    }
}
