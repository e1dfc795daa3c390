use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use veranda_catalog::Room;
use veranda_core::{BookingError, BookingResult};

use crate::models::Reservation;

/// A validated stay window. Calendar dates, no time-of-day; check-in is
/// inclusive, check-out exclusive, so back-to-back stays never collide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Rejects a non-positive range with `InvalidDateRange` before any
    /// availability or pricing computation runs.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> BookingResult<Self> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Half-open interval overlap: `[a.in, a.out)` intersects `[b.in, b.out)`.
pub fn ranges_overlap(a: &StayDates, b: &StayDates) -> bool {
    a.check_in < b.check_out && a.check_out > b.check_in
}

/// True when any live reservation for this room holds dates that overlap the
/// requested stay. Cancelled and completed reservations never block.
pub fn has_conflict(requested: &StayDates, existing: &[Reservation]) -> bool {
    existing.iter().any(|r| {
        if !r.status.blocks_availability() {
            return false;
        }
        match StayDates::new(r.check_in, r.check_out) {
            Ok(held) => ranges_overlap(requested, &held),
            // A stored reservation with an inverted range holds nothing.
            Err(_) => false,
        }
    })
}

/// Decide whether a single room can take the requested stay.
///
/// Checks, in order: the administrative `available` flag, the capacity gate,
/// then date conflicts against the supplied reservations. Read-only; the
/// caller supplies the reservation set for this room.
pub fn room_is_bookable(
    room: &Room,
    stay: &StayDates,
    guests: i32,
    existing: &[Reservation],
) -> BookingResult<()> {
    if !room.available {
        return Err(BookingError::Unavailable);
    }
    if guests > room.max_occupancy {
        return Err(BookingError::CapacityExceeded {
            requested: guests,
            max: room.max_occupancy,
        });
    }
    if has_conflict(stay, existing) {
        return Err(BookingError::Unavailable);
    }
    Ok(())
}

/// Catalog scan: the subset of rooms meeting both the capacity and the
/// non-overlap condition. `reservations_for` yields the live reservation set
/// for a given room id.
pub fn select_available_rooms<'a, F>(
    rooms: &'a [Room],
    stay: &StayDates,
    guests: i32,
    mut reservations_for: F,
) -> Vec<&'a Room>
where
    F: FnMut(&str) -> Vec<Reservation>,
{
    rooms
        .iter()
        .filter(|room| {
            let existing = reservations_for(&room.id);
            room_is_bookable(room, stay, guests, &existing).is_ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaymentStatus, Reservation, ReservationStatus, RoomSummary};
    use chrono::Utc;
    use veranda_core::GuestContact;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(from: NaiveDate, to: NaiveDate) -> StayDates {
        StayDates::new(from, to).unwrap()
    }

    fn reservation(
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: ReservationStatus,
    ) -> Reservation {
        let now = Utc::now();
        Reservation {
            id: "r1".to_string(),
            room: RoomSummary {
                room_id: room_id.to_string(),
                room_name: "Deluxe Green Room".to_string(),
                room_type: "deluxe-green".to_string(),
                nightly_rate: 8499.0,
            },
            guest: GuestContact {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
            },
            check_in,
            check_out,
            guests: 2,
            total_amount: 28046.7,
            status,
            payment_status: PaymentStatus::Pending,
            special_requests: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn room(id: &str, max_occupancy: i32, available: bool) -> Room {
        let now = Utc::now();
        Room {
            id: id.to_string(),
            name: "Deluxe Green Room".to_string(),
            room_type: "deluxe-green".to_string(),
            base_price: 6999.0,
            pricing: None,
            max_occupancy,
            size: "35 sqm".to_string(),
            description: String::new(),
            images: vec![],
            amenities: vec![],
            available,
            is_popular: false,
            rating: None,
            review_count: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_invalid_date_range_rejected() {
        let d = date(2024, 6, 10);
        assert!(matches!(
            StayDates::new(d, d),
            Err(BookingError::InvalidDateRange)
        ));
        assert!(matches!(
            StayDates::new(date(2024, 6, 12), date(2024, 6, 10)),
            Err(BookingError::InvalidDateRange)
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = stay(date(2024, 6, 10), date(2024, 6, 13));
        let b = stay(date(2024, 6, 12), date(2024, 6, 15));
        let c = stay(date(2024, 7, 1), date(2024, 7, 2));

        assert_eq!(ranges_overlap(&a, &b), ranges_overlap(&b, &a));
        assert!(ranges_overlap(&a, &b));
        assert_eq!(ranges_overlap(&a, &c), ranges_overlap(&c, &a));
        assert!(!ranges_overlap(&a, &c));
    }

    #[test]
    fn test_back_to_back_stays_allowed() {
        // One guest checks out the day the next checks in.
        let first = stay(date(2024, 6, 10), date(2024, 6, 13));
        let second = stay(date(2024, 6, 13), date(2024, 6, 16));
        assert!(!ranges_overlap(&first, &second));
        assert!(!ranges_overlap(&second, &first));
    }

    #[test]
    fn test_confirmed_reservation_blocks_overlap() {
        // Existing confirmed stay 06-10 .. 06-13; request 06-12 .. 06-15
        // collides on June 12.
        let existing = vec![reservation(
            "x",
            date(2024, 6, 10),
            date(2024, 6, 13),
            ReservationStatus::Confirmed,
        )];
        let r = room("x", 4, true);

        let conflicting = stay(date(2024, 6, 12), date(2024, 6, 15));
        assert!(matches!(
            room_is_bookable(&r, &conflicting, 2, &existing),
            Err(BookingError::Unavailable)
        ));

        // Exclusive-end boundary: starting on the existing checkout is fine.
        let boundary = stay(date(2024, 6, 13), date(2024, 6, 16));
        assert!(room_is_bookable(&r, &boundary, 2, &existing).is_ok());
    }

    #[test]
    fn test_cancelled_and_completed_never_block() {
        let r = room("x", 4, true);
        let requested = stay(date(2024, 6, 11), date(2024, 6, 12));

        for status in [ReservationStatus::Cancelled, ReservationStatus::Completed] {
            let existing = vec![reservation(
                "x",
                date(2024, 6, 10),
                date(2024, 6, 13),
                status,
            )];
            assert!(room_is_bookable(&r, &requested, 2, &existing).is_ok());
        }
    }

    #[test]
    fn test_capacity_gate() {
        let r = room("x", 3, true);
        let requested = stay(date(2024, 8, 1), date(2024, 8, 3));

        assert!(room_is_bookable(&r, &requested, 3, &[]).is_ok());
        assert!(matches!(
            room_is_bookable(&r, &requested, 4, &[]),
            Err(BookingError::CapacityExceeded {
                requested: 4,
                max: 3
            })
        ));
    }

    #[test]
    fn test_unavailable_flag_gates_regardless_of_dates() {
        let r = room("x", 4, false);
        let requested = stay(date(2024, 8, 1), date(2024, 8, 3));
        assert!(matches!(
            room_is_bookable(&r, &requested, 2, &[]),
            Err(BookingError::Unavailable)
        ));
    }

    #[test]
    fn test_select_available_rooms_filters_capacity_and_conflicts() {
        let rooms = vec![room("a", 3, true), room("b", 6, true), room("c", 6, false)];
        let requested = stay(date(2024, 8, 1), date(2024, 8, 3));

        // Room b has a pending overlap; room a is too small for 4 guests;
        // room c is administratively closed.
        let held = reservation(
            "b",
            date(2024, 8, 2),
            date(2024, 8, 5),
            ReservationStatus::Pending,
        );

        let picked = select_available_rooms(&rooms, &requested, 4, |room_id| {
            if room_id == "b" {
                vec![held.clone()]
            } else {
                vec![]
            }
        });
        assert!(picked.is_empty());

        let picked = select_available_rooms(&rooms, &requested, 2, |_| vec![]);
        let ids: Vec<&str> = picked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_nights_count() {
        assert_eq!(stay(date(2024, 7, 1), date(2024, 7, 4)).nights(), 3);
        assert_eq!(stay(date(2024, 7, 1), date(2024, 7, 2)).nights(), 1);
    }
}
