use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::fitness_class::{ClassResponse, ClassSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub fitness_class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/book`. Every field is optional at the serde layer so
/// that absent fields reach the handler's presence check instead of being
/// rejected by the extractor with a framework-shaped error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: BookingDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub booking_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub fitness_class_name: String,
    pub fitness_class_instructor: String,
    pub fitness_class: ClassSummary,
}

/// One row of `GET /api/bookings`. The class is nested in full so callers
/// see the name/instructor/slots snapshot as of read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListEntry {
    pub id: i64,
    pub fitness_class: ClassResponse,
    pub client_name: String,
    pub client_email: String,
    pub created_at: String,
}
