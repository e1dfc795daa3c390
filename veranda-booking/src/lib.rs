pub mod availability;
pub mod lifecycle;
pub mod models;
pub mod repository;
pub mod stats;

pub use availability::{ranges_overlap, room_is_bookable, select_available_rooms, StayDates};
pub use models::{NewReservation, PaymentStatus, Reservation, ReservationStatus, RoomSummary};
pub use stats::{compute_stats, DashboardStats};
