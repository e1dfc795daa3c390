use veranda_core::{BookingError, BookingResult};

use crate::models::ReservationStatus;

/// Validate a status write against the one-way lifecycle:
///
/// ```text
/// pending ---> confirmed ---> completed
///    \
///     +-----> cancelled
/// ```
///
/// Every other transition, including any move backward and re-opening a
/// cancelled or completed reservation, is rejected. Called in front of every
/// status write; the storage layer itself stays a plain overwrite.
pub fn validate_transition(
    from: ReservationStatus,
    to: ReservationStatus,
) -> BookingResult<()> {
    use ReservationStatus::*;

    let allowed = matches!(
        (from, to),
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed)
    );

    if allowed {
        Ok(())
    } else {
        Err(BookingError::InvalidTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
    }
}
