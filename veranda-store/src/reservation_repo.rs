use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use veranda_booking::models::{
    NewReservation, PaymentStatus, Reservation, ReservationStatus, RoomSummary,
};
use veranda_booking::repository::ReservationRepository;
use veranda_core::{BookingError, BookingResult, GuestContact};

use crate::{read_err, write_err};

pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: String,
    room_id: String,
    room_name: String,
    room_type: String,
    nightly_rate: f64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
    guests: i32,
    total_amount: f64,
    status: String,
    payment_status: String,
    special_requests: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl ReservationRow {
    fn into_reservation(self) -> BookingResult<Reservation> {
        let status: ReservationStatus = self
            .status
            .parse()
            .map_err(BookingError::PersistenceUnavailable)?;
        let payment_status: PaymentStatus = self
            .payment_status
            .parse()
            .map_err(BookingError::PersistenceUnavailable)?;

        Ok(Reservation {
            id: self.id,
            room: RoomSummary {
                room_id: self.room_id,
                room_name: self.room_name,
                room_type: self.room_type,
                nightly_rate: self.nightly_rate,
            },
            guest: GuestContact {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
            },
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            total_amount: self.total_amount,
            status,
            payment_status,
            special_requests: self.special_requests,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const RESERVATION_COLUMNS: &str = "id, room_id, room_name, room_type, nightly_rate, \
     first_name, last_name, email, phone, check_in, check_out, guests, total_amount, \
     status, payment_status, special_requests, created_at, updated_at";

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn create_reservation(&self, reservation: &NewReservation) -> BookingResult<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO reservations (id, room_id, room_name, room_type, nightly_rate,
                                      first_name, last_name, email, phone,
                                      check_in, check_out, guests, total_amount,
                                      status, payment_status, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(&id)
        .bind(&reservation.room.room_id)
        .bind(&reservation.room.room_name)
        .bind(&reservation.room.room_type)
        .bind(reservation.room.nightly_rate)
        .bind(&reservation.guest.first_name)
        .bind(&reservation.guest.last_name)
        .bind(&reservation.guest.email)
        .bind(&reservation.guest.phone)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .bind(reservation.guests)
        .bind(reservation.total_amount)
        .bind(reservation.status.as_str())
        .bind(reservation.payment_status.as_str())
        .bind(&reservation.special_requests)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(id)
    }

    async fn get_reservation(&self, id: &str) -> BookingResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        row.map(ReservationRow::into_reservation).transpose()
    }

    async fn list_reservations(&self) -> BookingResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        rows.into_iter()
            .map(ReservationRow::into_reservation)
            .collect()
    }

    async fn list_blocking_for_room(&self, room_id: &str) -> BookingResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations \
             WHERE room_id = $1 AND status IN ('confirmed', 'pending')"
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        rows.into_iter()
            .map(ReservationRow::into_reservation)
            .collect()
    }

    async fn update_status(&self, id: &str, status: ReservationStatus) -> BookingResult<()> {
        let result =
            sqlx::query("UPDATE reservations SET status = $1, updated_at = NOW() WHERE id = $2")
                .bind(status.as_str())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(write_err)?;

        if result.rows_affected() == 0 {
            return Err(BookingError::PersistenceWriteFailed(format!(
                "reservation {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn delete_reservation(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}
