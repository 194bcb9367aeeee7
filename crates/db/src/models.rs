use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFitnessClass {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub total_slots: i32,
    pub available_slots: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: i64,
    pub fitness_class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
}

/// A booking joined to its class, as returned by the by-email query. The
/// class columns are a read-time snapshot, not booking-time state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingWithClass {
    pub id: i64,
    pub fitness_class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
    pub class_name: String,
    pub class_instructor: String,
    pub class_start_time: DateTime<Utc>,
    pub class_available_slots: i32,
}
