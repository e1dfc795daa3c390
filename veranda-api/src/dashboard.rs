use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_util::stream::Stream;
use futures_util::StreamExt;
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use veranda_booking::models::Reservation;
use veranda_booking::stats::{compute_stats, DashboardStats};
use veranda_core::Contact;

use crate::error::degrade_read;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/dashboard/stats", get(get_stats))
        .route("/v1/dashboard/stream", get(stream_dashboard))
}

/// Full dashboard state. Pushed whole on every change; subscribers replace
/// their local state with it, never patch.
#[derive(Debug, Serialize)]
struct DashboardSnapshot {
    stats: DashboardStats,
    reservations: Vec<Reservation>,
    contacts: Vec<Contact>,
}

async fn load_snapshot(state: &AppState) -> DashboardSnapshot {
    let reservations = degrade_read(state.reservations.list_reservations().await, "reservations");
    let rooms = degrade_read(state.rooms.list_rooms().await, "rooms");
    let contacts = degrade_read(state.contacts.list_contacts().await, "contacts");

    DashboardSnapshot {
        stats: compute_stats(&reservations, &rooms, &contacts),
        reservations,
        contacts,
    }
}

/// Stats tile only; the reservation and contact lists are folded into the
/// aggregate and never serialized here.
async fn get_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let reservations = degrade_read(state.reservations.list_reservations().await, "reservations");
    let rooms = degrade_read(state.rooms.list_rooms().await, "rooms");
    let contacts = degrade_read(state.contacts.list_contacts().await, "contacts");

    Json(compute_stats(&reservations, &rooms, &contacts))
}

/// SSE stream of dashboard snapshots. One snapshot per change event or
/// refresh tick; best effort, no ordering guarantee beyond commit order.
async fn stream_dashboard(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.changes.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(move |event| {
        let state = state.clone();
        async move {
            // A lagged receiver just waits for the next event; every event
            // carries the full snapshot anyway.
            event.ok()?;

            let snapshot = load_snapshot(&state).await;
            let data = serde_json::to_string(&snapshot).ok()?;
            Some(Ok(Event::default().event("snapshot").data(data)))
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
