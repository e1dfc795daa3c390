use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;
use veranda_booking::availability::{room_is_bookable, StayDates};
use veranda_catalog::Room;

use crate::error::{degrade_read, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/availability", get(search_available_rooms))
}

/// Catalog scan: rooms open for the requested window and party size.
///
/// The capacity and `available` filters are pushed to the store; the date
/// conflict check runs here against each candidate's live reservations. A
/// room whose reservation set cannot be read is excluded rather than
/// optimistically offered.
async fn search_available_rooms(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<Room>>, AppError> {
    let stay = StayDates::new(query.check_in, query.check_out)?;
    if query.guests < 1 {
        return Err(AppError::ValidationError(
            "guests must be at least 1".to_string(),
        ));
    }

    let candidates = degrade_read(
        state.rooms.list_candidate_rooms(query.guests).await,
        "candidate rooms",
    );

    let mut available = Vec::new();
    for room in candidates {
        let existing = match state.reservations.list_blocking_for_room(&room.id).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!("Skipping room {}: reservation read failed: {}", room.id, e);
                continue;
            }
        };

        if room_is_bookable(&room, &stay, query.guests, &existing).is_ok() {
            available.push(room);
        }
    }

    Ok(Json(available))
}
