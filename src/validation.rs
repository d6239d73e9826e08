use thiserror::Error;
use time::{Duration, OffsetDateTime};

use crate::models::reservation::ReservationRequest;

/// Reservations can be placed at most this many days ahead.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

/// Why a reservation request was rejected. Display strings are shown to the
/// customer as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a future date.")]
    PastDate,
    #[error("Please select a future time.")]
    PastTime,
    #[error("Please select a date within the next 30 days.")]
    DateTooFar,
    #[error("Please select a region that belongs to the chosen country.")]
    RegionMismatch,
}

/// Checks a reservation request against the supplied clock reading. Rules run
/// in order and the first failure wins; a request that passes is safe to hand
/// to the prompt formatter.
pub fn validate_request(
    request: &ReservationRequest,
    now: OffsetDateTime,
) -> Result<(), ValidationError> {
    if request.email.is_empty() || !request.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let today = now.date();
    if request.date < today {
        return Err(ValidationError::PastDate);
    }
    if request.date == today && request.time < now.time() {
        return Err(ValidationError::PastTime);
    }
    if request.date > today + Duration::days(BOOKING_WINDOW_DAYS) {
        return Err(ValidationError::DateTooFar);
    }

    if !request.country.regions().contains(&request.region.as_str()) {
        return Err(ValidationError::RegionMismatch);
    }

    Ok(())
}
