use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientApiError {
    #[error("validation error: {errors:?}")]
    Validation { errors: Vec<String> },

    #[error("client not found")]
    NotFound,

    #[error("database error: {message}")]
    Database { message: String },
}

// Client endpoints discriminate their failures normally; the collapsed
// error contract belongs to invoice creation alone.
impl IntoResponse for ClientApiError {
    fn into_response(self) -> Response {
        match self {
            ClientApiError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Invalid client data",
                    "errors": errors,
                })),
            )
                .into_response(),

            ClientApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Client not found" })),
            )
                .into_response(),

            ClientApiError::Database { message } => {
                tracing::error!("client database error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for ClientApiError {
    fn from(err: sqlx::Error) -> Self {
        ClientApiError::Database {
            message: format!("Database error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_400() {
        let error = ClientApiError::Validation {
            errors: vec!["name must not be empty".to_string()],
        };
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            ClientApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_database_error_is_500() {
        let error = ClientApiError::Database {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
