use async_trait::async_trait;
use veranda_catalog::{NewRoom, Room};
use veranda_core::{BookingResult, Contact, NewContact};

use crate::models::{NewReservation, Reservation, ReservationStatus};

/// Repository trait for room catalog access
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create_room(&self, room: &NewRoom) -> BookingResult<String>;

    async fn get_room(&self, id: &str) -> BookingResult<Option<Room>>;

    /// All rooms, newest first.
    async fn list_rooms(&self) -> BookingResult<Vec<Room>>;

    /// Rooms passing the equality filter `available == true` and the range
    /// filter `max_occupancy >= guests`. Date conflicts are the caller's job.
    async fn list_candidate_rooms(&self, guests: i32) -> BookingResult<Vec<Room>>;

    async fn update_room(&self, id: &str, room: &NewRoom) -> BookingResult<()>;

    async fn delete_room(&self, id: &str) -> BookingResult<()>;
}

/// Repository trait for reservation data access
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Assigns the id and timestamps, writes a single document, returns the
    /// new id. On error the caller must assume nothing was recorded.
    async fn create_reservation(&self, reservation: &NewReservation) -> BookingResult<String>;

    async fn get_reservation(&self, id: &str) -> BookingResult<Option<Reservation>>;

    /// All reservations, newest first.
    async fn list_reservations(&self) -> BookingResult<Vec<Reservation>>;

    /// Reservations for a room whose status still blocks availability
    /// (membership filter `status in [confirmed, pending]`).
    async fn list_blocking_for_room(&self, room_id: &str) -> BookingResult<Vec<Reservation>>;

    /// Plain overwrite of status and `updated_at`. Lifecycle ordering is
    /// validated by the caller, not here.
    async fn update_status(&self, id: &str, status: ReservationStatus) -> BookingResult<()>;

    /// Hard delete; irreversible.
    async fn delete_reservation(&self, id: &str) -> BookingResult<()>;
}

/// Repository trait for contact messages
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: &NewContact) -> BookingResult<String>;

    /// All messages, newest first.
    async fn list_contacts(&self) -> BookingResult<Vec<Contact>>;

    /// Sets the read flag; false -> true only, never reversed.
    async fn mark_read(&self, id: &str) -> BookingResult<()>;

    async fn delete_contact(&self, id: &str) -> BookingResult<()>;
}
