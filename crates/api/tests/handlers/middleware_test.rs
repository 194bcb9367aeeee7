use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitbook_api::middleware::error_handling::AppError;
use fitbook_core::errors::BookingError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

async fn response_parts(err: BookingError) -> (StatusCode, Value) {
    let response = AppError(err).into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value = serde_json::from_slice(&bytes).expect("Response body was not JSON");

    (status, value)
}

#[tokio::test]
async fn test_missing_fields_shape() {
    let (status, body) =
        response_parts(BookingError::Validation("Missing fields".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing fields" }));
}

#[tokio::test]
async fn test_unknown_class_uses_field_scoped_shape() {
    let (status, body) = response_parts(BookingError::ClassNotFound(999)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "class_id": ["Invalid pk \"999\" - object does not exist."] })
    );
}

#[tokio::test]
async fn test_no_slots_shape() {
    let (status, body) = response_parts(BookingError::NoSlotsAvailable).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No available slots for this class" }));
}

#[tokio::test]
async fn test_duplicate_booking_shape() {
    let (status, body) = response_parts(BookingError::DuplicateBooking).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Booking already exists for this class" })
    );
}

#[tokio::test]
async fn test_invalid_timezone_is_bad_request() {
    let (status, body) =
        response_parts(BookingError::InvalidTimezone("Mars/Olympus".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown timezone: Mars/Olympus");
}

#[tokio::test]
async fn test_email_required_shape() {
    let (status, body) =
        response_parts(BookingError::Validation("Email is required".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Email is required" }));
}

#[tokio::test]
async fn test_storage_failures_are_server_errors() {
    let (status, body) = response_parts(BookingError::Database(eyre::eyre!("connection reset"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Database error"));

    let (status, _) = response_parts(BookingError::Timeout).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
