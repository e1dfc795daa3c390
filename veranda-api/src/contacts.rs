use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;
use veranda_core::{Contact, NewContact};
use veranda_store::Collection;

use crate::error::{degrade_read, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/contacts", post(create_contact))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/contacts", get(list_contacts))
        .route("/v1/contacts/{id}/read", patch(mark_read))
        .route("/v1/contacts/{id}", delete(delete_contact))
}

#[derive(Debug, Serialize)]
struct ContactCreatedResponse {
    contact_id: String,
}

async fn create_contact(
    State(state): State<AppState>,
    Json(contact): Json<NewContact>,
) -> Result<Json<ContactCreatedResponse>, AppError> {
    let contact_id = state.contacts.create_contact(&contact).await?;
    state.changes.changed(Collection::Contacts);
    info!("Contact message received: {}", contact_id);

    Ok(Json(ContactCreatedResponse { contact_id }))
}

async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(degrade_read(state.contacts.list_contacts().await, "contacts"))
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), AppError> {
    state.contacts.mark_read(&id).await?;
    state.changes.changed(Collection::Contacts);
    Ok(())
}

async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), AppError> {
    state.contacts.delete_contact(&id).await?;
    state.changes.changed(Collection::Contacts);
    info!("Contact deleted: {}", id);
    Ok(())
}
