use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use veranda_booking::availability::{room_is_bookable, StayDates};
use veranda_booking::lifecycle::validate_transition;
use veranda_booking::models::{
    NewReservation, PaymentStatus, Reservation, ReservationStatus, RoomSummary,
};
use veranda_catalog::{nightly_rate, stay_quote, OccupancyTier};
use veranda_core::guest::GuestPayload;
use veranda_core::BookingError;
use veranda_store::Collection;

use crate::error::{degrade_read, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateReservationRequest {
    room_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    occupancy: OccupancyTier,
    #[serde(flatten)]
    guest: GuestPayload,
    #[serde(default)]
    special_requests: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReservationResponse {
    reservation_id: String,
    status: ReservationStatus,
    nights: i64,
    nightly_rate: f64,
    total_amount: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/reservations", post(create_reservation))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/reservations", get(list_reservations))
        .route("/v1/reservations/{id}/status", patch(update_status))
        .route("/v1/reservations/{id}", delete(delete_reservation))
}

/// The booking write path: validate, check availability, resolve the price,
/// persist a single reservation document.
///
/// Validation failures are rejected here before any store write. A store
/// failure surfaces as an error and means nothing was recorded; the caller
/// must not navigate to a confirmation state.
async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let stay = StayDates::new(req.check_in, req.check_out)?;
    if req.guests < 1 {
        return Err(AppError::ValidationError(
            "guests must be at least 1".to_string(),
        ));
    }

    let guest = req.guest.into_contact().ok_or_else(|| {
        AppError::ValidationError("guest contact information is required".to_string())
    })?;

    let room = state
        .rooms
        .get_room(&req.room_id)
        .await?
        .ok_or_else(|| AppError::from(BookingError::RoomNotFound(req.room_id.clone())))?;

    // On the write path a failed reservation read must not pass as "no
    // conflicts"; the error propagates instead of degrading.
    let existing = state.reservations.list_blocking_for_room(&room.id).await?;
    room_is_bookable(&room, &stay, req.guests, &existing)?;

    let rate = nightly_rate(&room, req.occupancy);
    let quote = stay_quote(rate, stay.nights(), state.business_rules.tax_rate);

    let reservation = NewReservation {
        room: RoomSummary {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            room_type: room.room_type.clone(),
            nightly_rate: rate,
        },
        guest,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        guests: req.guests,
        total_amount: quote.total,
        status: ReservationStatus::Pending,
        payment_status: PaymentStatus::Pending,
        special_requests: req.special_requests,
    };

    let reservation_id = state.reservations.create_reservation(&reservation).await?;
    state.changes.changed(Collection::Reservations);
    info!("Reservation created: {} for room {}", reservation_id, room.id);

    Ok(Json(ReservationResponse {
        reservation_id,
        status: ReservationStatus::Pending,
        nights: quote.nights,
        nightly_rate: rate,
        total_amount: quote.total,
    }))
}

async fn list_reservations(State(state): State<AppState>) -> Json<Vec<Reservation>> {
    Json(degrade_read(
        state.reservations.list_reservations().await,
        "reservations",
    ))
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: ReservationStatus,
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<(), AppError> {
    let current = state
        .reservations
        .get_reservation(&id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("reservation not found: {id}")))?;

    // The store accepts any overwrite; the lifecycle is enforced here, in
    // front of every status write.
    validate_transition(current.status, req.status)?;

    state.reservations.update_status(&id, req.status).await?;
    state.changes.changed(Collection::Reservations);
    info!(
        "Reservation {} moved from {} to {}",
        id,
        current.status.as_str(),
        req.status.as_str()
    );
    Ok(())
}

async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), AppError> {
    state.reservations.delete_reservation(&id).await?;
    state.changes.changed(Collection::Reservations);
    info!("Reservation deleted: {}", id);
    Ok(())
}
