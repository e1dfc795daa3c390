use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use veranda_core::{BookingError, BookingResult};

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    ServiceUnavailable(String),
    InternalServerError(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidDateRange | BookingError::CapacityExceeded { .. } => {
                AppError::ValidationError(err.to_string())
            }
            BookingError::RoomNotFound(_) => AppError::NotFoundError(err.to_string()),
            BookingError::Unavailable | BookingError::InvalidTransition { .. } => {
                AppError::ConflictError(err.to_string())
            }
            BookingError::PersistenceUnavailable(_) => {
                AppError::ServiceUnavailable(err.to_string())
            }
            BookingError::PersistenceWriteFailed(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Store unreachable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Read-path degradation: a transient store outage renders as an empty
/// collection instead of failing the page. Write paths never use this.
pub(crate) fn degrade_read<T>(result: BookingResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Read of {} failed, degrading to empty: {}", what, e);
            Vec::new()
        }
    }
}
