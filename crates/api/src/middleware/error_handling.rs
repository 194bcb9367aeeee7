//! # Error Handling Middleware
//!
//! Maps domain-specific errors to the documented HTTP status codes and JSON
//! error bodies. Two body shapes exist and are kept distinct on purpose: the
//! generic `{"error": "..."}` object, and the field-scoped
//! `{"class_id": ["..."]}` array used for unknown-class rejections. Clients
//! depend on both, so they are never unified.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use fitbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Business-rule rejections are client-correctable 400s, including
        // the unknown-class case. Lock timeouts and storage failures are
        // 500s the client may retry.
        let status = match &self.0 {
            BookingError::Validation(_)
            | BookingError::ClassNotFound(_)
            | BookingError::NoSlotsAvailable
            | BookingError::DuplicateBooking
            | BookingError::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
            BookingError::Timeout
            | BookingError::Database(_)
            | BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self.0 {
            BookingError::ClassNotFound(_) => {
                Json(json!({ "class_id": [self.0.to_string()] }))
            }
            _ => Json(json!({ "error": self.0.to_string() })),
        };

        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError.
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, BookingError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError, wrapping the report
/// in the opaque database variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}
