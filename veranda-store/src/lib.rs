pub mod app_config;
pub mod contact_repo;
pub mod database;
pub mod events;
pub mod redis_repo;
pub mod reservation_repo;
pub mod room_repo;

pub use contact_repo::PgContactRepository;
pub use database::DbClient;
pub use events::{ChangeEvent, ChangeFeed, Collection};
pub use redis_repo::RedisClient;
pub use reservation_repo::PgReservationRepository;
pub use room_repo::PgRoomRepository;

use veranda_core::BookingError;

/// A failed read: the caller could not ask, which is never the same as an
/// empty result.
pub(crate) fn read_err(e: sqlx::Error) -> BookingError {
    BookingError::PersistenceUnavailable(e.to_string())
}

/// A failed write: the caller must assume no change occurred.
pub(crate) fn write_err(e: sqlx::Error) -> BookingError {
    BookingError::PersistenceWriteFailed(e.to_string())
}
