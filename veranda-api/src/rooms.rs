use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, warn};
use veranda_catalog::{NewRoom, Room};
use veranda_store::Collection;

use crate::error::{degrade_read, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/rooms", get(list_rooms))
        .route("/v1/rooms/{id}", get(get_room))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/rooms", post(create_room))
        .route("/v1/rooms/{id}", put(update_room))
        .route("/v1/rooms/{id}", delete(delete_room))
}

async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(degrade_read(state.rooms.list_rooms().await, "rooms"))
}

async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    let room = match state.rooms.get_room(&id).await {
        Ok(room) => room,
        Err(e) => {
            // Read degradation: an unreachable store renders as "not found"
            // on the room page rather than a hard failure.
            warn!("Room lookup for {} failed: {}", id, e);
            None
        }
    };

    room.map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("room not found: {id}")))
}

#[derive(Debug, serde::Serialize)]
struct RoomCreatedResponse {
    room_id: String,
}

async fn create_room(
    State(state): State<AppState>,
    Json(room): Json<NewRoom>,
) -> Result<Json<RoomCreatedResponse>, AppError> {
    if room.max_occupancy < 1 {
        return Err(AppError::ValidationError(
            "max_occupancy must be at least 1".to_string(),
        ));
    }

    let room_id = state.rooms.create_room(&room).await?;
    state.changes.changed(Collection::Rooms);
    info!("Room created: {}", room_id);

    Ok(Json(RoomCreatedResponse { room_id }))
}

async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(room): Json<NewRoom>,
) -> Result<(), AppError> {
    if room.max_occupancy < 1 {
        return Err(AppError::ValidationError(
            "max_occupancy must be at least 1".to_string(),
        ));
    }

    state.rooms.update_room(&id, &room).await?;
    state.changes.changed(Collection::Rooms);
    Ok(())
}

async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), AppError> {
    state.rooms.delete_room(&id).await?;
    state.changes.changed(Collection::Rooms);
    info!("Room deleted: {}", id);
    Ok(())
}
