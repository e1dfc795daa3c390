use serde::Serialize;
use veranda_catalog::Room;
use veranda_core::Contact;

use crate::models::{PaymentStatus, Reservation, ReservationStatus};

/// Dashboard tile values, recomputed from the live collections on every
/// request. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_bookings: usize,
    /// Sum over reservations whose payment status is `paid`; everything else
    /// contributes zero here but still counts toward `total_bookings`.
    pub total_revenue: f64,
    /// Confirmed-or-completed bookings over total rooms, as a rounded
    /// percentage. 0 when there are no rooms.
    pub occupancy_rate: f64,
    pub total_rooms: usize,
    pub pending_bookings: usize,
    pub unread_contacts: usize,
}

/// Pure projection over the three collections; empty inputs contribute zero
/// to every metric.
pub fn compute_stats(
    reservations: &[Reservation],
    rooms: &[Room],
    contacts: &[Contact],
) -> DashboardStats {
    let total_bookings = reservations.len();
    let total_revenue = reservations
        .iter()
        .filter(|r| r.payment_status == PaymentStatus::Paid)
        .map(|r| r.total_amount)
        .sum();

    let pending_bookings = reservations
        .iter()
        .filter(|r| r.status == ReservationStatus::Pending)
        .count();

    let occupied = reservations
        .iter()
        .filter(|r| {
            matches!(
                r.status,
                ReservationStatus::Confirmed | ReservationStatus::Completed
            )
        })
        .count();

    let total_rooms = rooms.len();
    let occupancy_rate = if total_rooms > 0 {
        (occupied as f64 / total_rooms as f64 * 100.0).round()
    } else {
        0.0
    };

    let unread_contacts = contacts.iter().filter(|c| !c.read).count();

    DashboardStats {
        total_bookings,
        total_revenue,
        occupancy_rate,
        total_rooms,
        pending_bookings,
        unread_contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomSummary;
    use chrono::Utc;
    use veranda_core::GuestContact;

    fn reservation(
        total: f64,
        status: ReservationStatus,
        payment: PaymentStatus,
    ) -> Reservation {
        let now = Utc::now();
        Reservation {
            id: "r".to_string(),
            room: RoomSummary {
                room_id: "1".to_string(),
                room_name: "Deluxe Green Room".to_string(),
                room_type: "deluxe-green".to_string(),
                nightly_rate: 100.0,
            },
            guest: GuestContact {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
            },
            check_in: now.date_naive(),
            check_out: now.date_naive() + chrono::Days::new(1),
            guests: 1,
            total_amount: total,
            status,
            payment_status: payment,
            special_requests: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn room(id: &str) -> Room {
        let now = Utc::now();
        Room {
            id: id.to_string(),
            name: "Room".to_string(),
            room_type: "standard".to_string(),
            base_price: 100.0,
            pricing: None,
            max_occupancy: 2,
            size: "30 sqm".to_string(),
            description: String::new(),
            images: vec![],
            amenities: vec![],
            available: true,
            is_popular: false,
            rating: None,
            review_count: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn contact(read: bool) -> Contact {
        Contact {
            id: "c".to_string(),
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            phone: None,
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
            inquiry_type: "general".to_string(),
            read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_inputs_yield_zeroes() {
        let stats = compute_stats(&[], &[], &[]);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.occupancy_rate, 0.0);
        assert_eq!(stats.total_rooms, 0);
        assert_eq!(stats.pending_bookings, 0);
        assert_eq!(stats.unread_contacts, 0);
    }

    #[test]
    fn test_revenue_filters_on_paid_only() {
        // One paid at 500, one pending at 300: revenue counts only the first,
        // totals count both.
        let reservations = vec![
            reservation(500.0, ReservationStatus::Confirmed, PaymentStatus::Paid),
            reservation(300.0, ReservationStatus::Pending, PaymentStatus::Pending),
        ];

        let stats = compute_stats(&reservations, &[], &[]);
        assert_eq!(stats.total_revenue, 500.0);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.pending_bookings, 1);
    }

    #[test]
    fn test_occupancy_counts_confirmed_and_completed() {
        let reservations = vec![
            reservation(100.0, ReservationStatus::Confirmed, PaymentStatus::Paid),
            reservation(100.0, ReservationStatus::Completed, PaymentStatus::Paid),
            reservation(100.0, ReservationStatus::Cancelled, PaymentStatus::Refunded),
            reservation(100.0, ReservationStatus::Pending, PaymentStatus::Pending),
        ];
        let rooms = vec![room("1"), room("2"), room("3"), room("4")];

        let stats = compute_stats(&reservations, &rooms, &[]);
        assert_eq!(stats.occupancy_rate, 50.0);
    }

    #[test]
    fn test_unread_contact_count() {
        let contacts = vec![contact(false), contact(true), contact(false)];
        let stats = compute_stats(&[], &[], &contacts);
        assert_eq!(stats.unread_contacts, 2);
    }
}
