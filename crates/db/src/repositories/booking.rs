use chrono::{DateTime, Utc};
use fitbook_core::errors::{BookingError, BookingResult};
use sqlx::{Pool, Postgres};

use crate::models::{DbBooking, DbBookingWithClass, DbFitnessClass};
use crate::repositories::map_db_err;

/// Books one slot of a class for a client, atomically.
///
/// The whole sequence runs in a single transaction holding an exclusive lock
/// on the class row: lock, re-check capacity, check for an existing booking
/// by the same email, insert, decrement. Two concurrent requests for the
/// same class serialize on the row lock; requests for different classes do
/// not contend. Any error before commit rolls the transaction back, leaving
/// no partial writes.
///
/// `now` becomes the booking's `created_at`; passing it in keeps the
/// repository free of ambient clock reads.
///
/// Returns the created booking together with the post-decrement class row.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    class_id: i64,
    client_name: &str,
    client_email: &str,
    now: DateTime<Utc>,
) -> BookingResult<(DbBooking, DbFitnessClass)> {
    tracing::debug!(
        "Creating booking: class_id={}, client_email={}",
        class_id,
        client_email
    );

    let mut tx = pool.begin().await.map_err(map_db_err)?;

    // Bound the wait on the row lock; an expired wait surfaces as
    // SQLSTATE 55P03 and is mapped to BookingError::Timeout.
    sqlx::query("SET LOCAL lock_timeout = '5s'")
        .execute(&mut *tx)
        .await
        .map_err(map_db_err)?;

    // Exclusive lock on the class row. Held until commit or rollback, so
    // both checks below see state no concurrent booker can invalidate.
    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        SELECT id, name, instructor, start_time, total_slots, available_slots, created_at
        FROM fitness_classes
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(class_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(map_db_err)?
    .ok_or(BookingError::ClassNotFound(class_id))?;

    // Capacity check under the lock is the authoritative one.
    if class.available_slots <= 0 {
        return Err(BookingError::NoSlotsAvailable);
    }

    let already_booked = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM bookings
            WHERE fitness_class_id = $1 AND client_email = $2
        )
        "#,
    )
    .bind(class_id)
    .bind(client_email)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_db_err)?;

    if already_booked {
        return Err(BookingError::DuplicateBooking);
    }

    // The UNIQUE constraint backstops the existence check; map_db_err turns
    // a racing violation into DuplicateBooking as well.
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (fitness_class_id, client_name, client_email, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, fitness_class_id, client_name, client_email, created_at
        "#,
    )
    .bind(class_id)
    .bind(client_name)
    .bind(client_email)
    .bind(now)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_db_err)?;

    let updated_class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        UPDATE fitness_classes
        SET available_slots = available_slots - 1
        WHERE id = $1
        RETURNING id, name, instructor, start_time, total_slots, available_slots, created_at
        "#,
    )
    .bind(class_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_db_err)?;

    tx.commit().await.map_err(map_db_err)?;

    tracing::debug!(
        "Booking created: id={}, class_id={}, slots_left={}",
        booking.id,
        class_id,
        updated_class.available_slots
    );

    Ok((booking, updated_class))
}

/// All bookings made under an email address, joined to a read-time snapshot
/// of each class. Oldest first.
pub async fn get_bookings_by_email(
    pool: &Pool<Postgres>,
    client_email: &str,
) -> BookingResult<Vec<DbBookingWithClass>> {
    let bookings = sqlx::query_as::<_, DbBookingWithClass>(
        r#"
        SELECT b.id, b.fitness_class_id, b.client_name, b.client_email, b.created_at,
               c.name AS class_name,
               c.instructor AS class_instructor,
               c.start_time AS class_start_time,
               c.available_slots AS class_available_slots
        FROM bookings b
        JOIN fitness_classes c ON c.id = b.fitness_class_id
        WHERE b.client_email = $1
        ORDER BY b.created_at ASC, b.id ASC
        "#,
    )
    .bind(client_email)
    .fetch_all(pool)
    .await
    .map_err(map_db_err)?;

    Ok(bookings)
}
