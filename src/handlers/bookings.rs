use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Booking, BookingUpdate, NewBookingRequest};
use crate::services::booking as lifecycle;
use crate::services::notify;
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let booking = lifecycle::create_booking(&state.store, req)?;

    // Fire-and-forget; delivery failure never unwinds the booking.
    let notify_state = Arc::clone(&state);
    let notify_booking = booking.clone();
    tokio::spawn(async move {
        notify::notify_booking_confirmed(&notify_state, &notify_booking).await;
    });

    Ok(Json(booking))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Json<Vec<Booking>> {
    let bookings = match query.email.as_deref() {
        Some(email) => state.store.bookings_by_email(email),
        None => state.store.all_bookings(),
    };
    Json(bookings)
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    state
        .store
        .get_booking(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

// PATCH /api/bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(updates): Json<BookingUpdate>,
) -> Result<Json<Booking>, AppError> {
    let booking = lifecycle::apply_update(&state.store, &id, updates)?;
    Ok(Json(booking))
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking = lifecycle::cancel_booking(&state.store, &id)?;
    Ok(Json(booking))
}
