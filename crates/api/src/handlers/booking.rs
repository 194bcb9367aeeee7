use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use fitbook_core::errors::BookingError;
use fitbook_core::models::booking::{
    BookingDetails, BookingListEntry, CreateBookingRequest, CreateBookingResponse,
};
use fitbook_core::models::fitness_class::{ClassResponse, ClassSummary};
use fitbook_core::timezone;

use crate::{middleware::error_handling::AppError, ApiState};

/// Syntactic email check: a non-empty local part, exactly one '@', and a
/// dotted domain.
pub fn validate_email(email: &str) -> Result<(), BookingError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(BookingError::Validation("Invalid email address".to_string()))
    }
}

/// Books one slot of a class for a client.
///
/// Field presence and email syntax are checked before any storage access;
/// everything else (existence, capacity, duplicates) is decided inside the
/// atomic transaction in `fitbook-db`.
///
/// # Endpoint
///
/// ```text
/// POST /api/book
/// {"class_id": 1, "client_name": "John Doe", "client_email": "j@example.com"}
/// ```
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let (Some(class_id), Some(client_name), Some(client_email)) =
        (payload.class_id, payload.client_name, payload.client_email)
    else {
        return Err(BookingError::Validation("Missing fields".to_string()).into());
    };

    // Blank strings count as missing, same as absent fields.
    if client_name.trim().is_empty() || client_email.trim().is_empty() {
        return Err(BookingError::Validation("Missing fields".to_string()).into());
    }

    validate_email(&client_email)?;

    let (booking, class) = fitbook_db::repositories::booking::create_booking(
        &state.db_pool,
        class_id,
        &client_name,
        &client_email,
        Utc::now(),
    )
    .await?;

    let response = CreateBookingResponse {
        message: "Booking created successfully".to_string(),
        booking: BookingDetails {
            booking_id: booking.id,
            client_name: booking.client_name,
            client_email: booking.client_email,
            fitness_class_name: class.name.clone(),
            fitness_class_instructor: class.instructor.clone(),
            fitness_class: ClassSummary {
                id: class.id,
                name: class.name,
                available_slots: class.available_slots,
            },
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Query parameters for the booking listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub email: Option<String>,
}

/// Lists all bookings made under an email address, oldest first, each with
/// a read-time snapshot of its class.
///
/// # Endpoint
///
/// ```text
/// GET /api/bookings?email=j@example.com
/// ```
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingListEntry>>, AppError> {
    let email = query
        .email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| BookingError::Validation("Email is required".to_string()))?;

    validate_email(email)?;

    let bookings =
        fitbook_db::repositories::booking::get_bookings_by_email(&state.db_pool, email).await?;

    let tz_name = &state.default_timezone;
    let mut response = Vec::with_capacity(bookings.len());
    for row in bookings {
        response.push(BookingListEntry {
            id: row.id,
            fitness_class: ClassResponse {
                id: row.fitness_class_id,
                name: row.class_name,
                instructor: row.class_instructor,
                start_time: timezone::to_local(row.class_start_time, tz_name)?,
                available_slots: row.class_available_slots,
            },
            client_name: row.client_name,
            client_email: row.client_email,
            created_at: timezone::to_local(row.created_at, tz_name)?,
        });
    }

    Ok(Json(response))
}
