use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessClass {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub total_slots: i32,
    pub available_slots: i32,
}

/// A class as rendered on the listing endpoint. `start_time` is already
/// converted to the requested timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: String,
    pub available_slots: i32,
}

/// Abbreviated class snapshot nested inside a successful booking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub available_slots: i32,
}
