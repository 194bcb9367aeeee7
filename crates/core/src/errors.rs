use thiserror::Error;

/// Error taxonomy for the booking service.
///
/// The display strings of the business-rule variants are part of the wire
/// contract and must not be reworded.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid pk \"{0}\" - object does not exist.")]
    ClassNotFound(i64),

    #[error("No available slots for this class")]
    NoSlotsAvailable,

    #[error("Booking already exists for this class")]
    DuplicateBooking,

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Timed out waiting for the class row lock")]
    Timeout,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
