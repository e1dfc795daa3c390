pub mod contact;
pub mod guest;

pub use contact::{Contact, NewContact};
pub use guest::GuestContact;

/// Error taxonomy shared by every crate in the workspace.
///
/// Validation errors are rejected at the boundary before any persistence call;
/// store errors distinguish "could not ask" from "write did not happen" so a
/// failed booking is never silently treated as successful.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("check-out must be strictly after check-in")]
    InvalidDateRange,

    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("guest count {requested} exceeds room capacity {max}")]
    CapacityExceeded { requested: i32, max: i32 },

    #[error("room is not available for the requested dates")]
    Unavailable,

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("storage unreachable: {0}")]
    PersistenceUnavailable(String),

    #[error("storage write failed: {0}")]
    PersistenceWriteFailed(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    /// True for errors produced by input validation rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidDateRange
                | BookingError::CapacityExceeded { .. }
                | BookingError::InvalidTransition { .. }
        )
    }
}
