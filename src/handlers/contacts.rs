use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::errors::AppError;
use crate::models::{Contact, NewContactRequest};
use crate::services::notify;
use crate::state::AppState;

// POST /api/contacts
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewContactRequest>,
) -> Result<Json<Contact>, AppError> {
    req.validate()?;

    let contact = state.store.create_contact(req);

    let notify_state = Arc::clone(&state);
    let notify_contact = contact.clone();
    tokio::spawn(async move {
        notify::notify_contact_received(&notify_state, &notify_contact).await;
    });

    Ok(Json(contact))
}

// GET /api/contacts
pub async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<Vec<Contact>> {
    Json(state.store.all_contacts())
}
