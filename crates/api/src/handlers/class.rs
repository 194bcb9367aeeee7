use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use fitbook_core::models::fitness_class::ClassResponse;
use fitbook_core::timezone;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the class listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListClassesQuery {
    /// IANA timezone for rendering start times (default from config)
    pub tz: Option<String>,
}

/// Lists upcoming classes, soonest first, with start times rendered in the
/// requested timezone.
///
/// # Endpoint
///
/// ```text
/// GET /api/classes?tz=Asia/Kolkata
/// ```
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListClassesQuery>,
) -> Result<Json<Vec<ClassResponse>>, AppError> {
    let tz_name = query.tz.as_deref().unwrap_or(state.default_timezone.as_str());

    // Reject an unknown timezone before touching the database.
    timezone::validate(tz_name)?;

    let classes =
        fitbook_db::repositories::fitness_class::get_upcoming_classes(&state.db_pool, Utc::now())
            .await?;

    let mut response = Vec::with_capacity(classes.len());
    for class in classes {
        response.push(ClassResponse {
            id: class.id,
            name: class.name,
            instructor: class.instructor,
            start_time: timezone::to_local(class.start_time, tz_name)?,
            available_slots: class.available_slots,
        });
    }

    Ok(Json(response))
}
