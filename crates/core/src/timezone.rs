//! Timezone-aware display formatting.
//!
//! All instants are stored and passed around as `DateTime<Utc>`; conversion
//! to a client-facing local time happens only at the rendering edge, through
//! this module.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::errors::{BookingError, BookingResult};

/// Display timezone used when a request does not name one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts an absolute instant to a display string in the named IANA
/// timezone.
pub fn to_local(instant: DateTime<Utc>, tz_name: &str) -> BookingResult<String> {
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| BookingError::InvalidTimezone(tz_name.to_string()))?;

    Ok(instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string())
}

/// Checks that a timezone name resolves, without formatting anything.
pub fn validate(tz_name: &str) -> BookingResult<()> {
    tz_name
        .parse::<Tz>()
        .map(|_| ())
        .map_err(|_| BookingError::InvalidTimezone(tz_name.to_string()))
}
