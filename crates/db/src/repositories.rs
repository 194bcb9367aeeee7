pub mod booking;
pub mod fitness_class;

use fitbook_core::errors::BookingError;

// SQLSTATE raised by Postgres when a lock_timeout expires while waiting on
// a row lock.
const LOCK_NOT_AVAILABLE: &str = "55P03";

/// Maps a low-level sqlx error onto the domain taxonomy.
///
/// The only UNIQUE constraint besides primary keys is
/// `(fitness_class_id, client_email)`, so a unique violation always means a
/// duplicate booking that raced past the in-transaction existence check.
pub(crate) fn map_db_err(err: sqlx::Error) -> BookingError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return BookingError::DuplicateBooking;
        }
        if db_err.code().as_deref() == Some(LOCK_NOT_AVAILABLE) {
            return BookingError::Timeout;
        }
    }

    BookingError::Database(eyre::Report::new(err))
}
