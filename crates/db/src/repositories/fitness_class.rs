use chrono::{DateTime, Utc};
use fitbook_core::errors::BookingResult;
use sqlx::{Pool, Postgres};

use crate::models::DbFitnessClass;
use crate::repositories::map_db_err;

pub async fn create_fitness_class(
    pool: &Pool<Postgres>,
    name: &str,
    instructor: &str,
    start_time: DateTime<Utc>,
    total_slots: i32,
) -> BookingResult<DbFitnessClass> {
    tracing::debug!(
        "Creating fitness class: name={}, instructor={}, total_slots={}",
        name,
        instructor,
        total_slots
    );

    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        INSERT INTO fitness_classes (name, instructor, start_time, total_slots, available_slots)
        VALUES ($1, $2, $3, $4, $4)
        RETURNING id, name, instructor, start_time, total_slots, available_slots, created_at
        "#,
    )
    .bind(name)
    .bind(instructor)
    .bind(start_time)
    .bind(total_slots)
    .fetch_one(pool)
    .await
    .map_err(map_db_err)?;

    Ok(class)
}

/// Classes starting at or after `now`, soonest first. The id tie-break keeps
/// the ordering stable for classes sharing a start instant.
pub async fn get_upcoming_classes(
    pool: &Pool<Postgres>,
    now: DateTime<Utc>,
) -> BookingResult<Vec<DbFitnessClass>> {
    let classes = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        SELECT id, name, instructor, start_time, total_slots, available_slots, created_at
        FROM fitness_classes
        WHERE start_time >= $1
        ORDER BY start_time ASC, id ASC
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await
    .map_err(map_db_err)?;

    Ok(classes)
}

pub async fn get_class_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> BookingResult<Option<DbFitnessClass>> {
    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        SELECT id, name, instructor, start_time, total_slots, available_slots, created_at
        FROM fitness_classes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_db_err)?;

    Ok(class)
}
