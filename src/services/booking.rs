use validator::Validate;

use crate::errors::AppError;
use crate::models::{
    Booking, BookingDraft, BookingStatus, BookingUpdate, EventType, NewBookingRequest,
    PackageType, PaymentStatus,
};
use crate::services::pricing;
use crate::store::Store;

/// Creates a booking: terms gate, payload validation, server-side pricing,
/// then persistence. Nothing is stored when any of the checks fail.
/// Notification is the caller's concern (fire-and-forget in the handler).
pub fn create_booking(store: &Store, req: NewBookingRequest) -> Result<Booking, AppError> {
    if !req.terms_accepted {
        return Err(AppError::TermsNotAccepted);
    }

    req.validate()?;

    let quote = pricing::quote(&req.package_type, &req.add_ons)?;
    let package_type = PackageType::parse(&req.package_type)
        .ok_or_else(|| AppError::InvalidPackageType(req.package_type.clone()))?;

    let draft = BookingDraft {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        event_date: req.event_date,
        event_time: req.event_time,
        event_type: EventType::from_str(&req.event_type),
        event_location: req.event_location,
        package_type,
        add_ons: req.add_ons,
        special_requirements: req.special_requirements,
        total_amount: quote.total,
        advance_amount: quote.advance,
        terms_accepted: req.terms_accepted,
    };

    Ok(store.create_booking(draft))
}

/// pending -> payment-requested. Re-entry is idempotent: a retried QR request
/// changes neither amounts nor any previously stored payment reference.
pub fn mark_payment_requested(store: &Store, id: &str) -> Result<Booking, AppError> {
    let booking = store
        .get_booking(id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    match booking.status {
        BookingStatus::Pending | BookingStatus::PaymentRequested => store
            .update_booking(
                id,
                BookingUpdate {
                    status: Some(BookingStatus::PaymentRequested),
                    ..Default::default()
                },
            )
            .ok_or_else(|| AppError::NotFound(format!("booking {id}"))),
        BookingStatus::Confirmed => Err(AppError::PaymentConflict(
            "booking is already confirmed".to_string(),
        )),
        BookingStatus::Cancelled => Err(AppError::PaymentConflict(
            "booking has been cancelled".to_string(),
        )),
    }
}

/// Drives the transition into `confirmed`. Re-confirming with the same payment
/// reference is a no-op returning the stored record; a different reference is
/// a conflict rather than a silent overwrite.
pub fn confirm_payment(
    store: &Store,
    id: &str,
    payment_ref: &str,
    order_ref: Option<&str>,
) -> Result<Booking, AppError> {
    let booking = store
        .get_booking(id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    match booking.status {
        BookingStatus::Confirmed => {
            if booking.payment_id.as_deref() == Some(payment_ref) {
                Ok(booking)
            } else {
                Err(AppError::PaymentConflict(format!(
                    "booking {id} is already confirmed with a different payment reference"
                )))
            }
        }
        BookingStatus::Cancelled => Err(AppError::PaymentConflict(
            "cannot confirm a cancelled booking".to_string(),
        )),
        BookingStatus::Pending | BookingStatus::PaymentRequested => {
            let updated = store
                .update_booking(
                    id,
                    BookingUpdate {
                        payment_status: Some(PaymentStatus::Completed),
                        payment_id: Some(payment_ref.to_string()),
                        order_id: order_ref.map(|s| s.to_string()),
                        status: Some(BookingStatus::Confirmed),
                        ..Default::default()
                    },
                )
                .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

            tracing::info!(booking_id = %id, payment_id = %payment_ref, "booking confirmed");
            Ok(updated)
        }
    }
}

/// Explicit cancellation. No refund flow: a confirmed (paid) booking cannot be
/// cancelled through this path. Cancelling twice is a no-op.
pub fn cancel_booking(store: &Store, id: &str) -> Result<Booking, AppError> {
    let booking = store
        .get_booking(id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    match booking.status {
        BookingStatus::Cancelled => Ok(booking),
        BookingStatus::Confirmed => Err(AppError::PaymentConflict(
            "cannot cancel a confirmed booking".to_string(),
        )),
        BookingStatus::Pending | BookingStatus::PaymentRequested => store
            .update_booking(
                id,
                BookingUpdate {
                    status: Some(BookingStatus::Cancelled),
                    ..Default::default()
                },
            )
            .ok_or_else(|| AppError::NotFound(format!("booking {id}"))),
    }
}

/// PATCH semantics. Plain field edits merge through the store; a payload
/// carrying `paymentStatus: completed` is routed through `confirm_payment` so
/// the idempotency and conflict rules hold. Booking status cannot be set
/// directly except to `cancelled`.
pub fn apply_update(
    store: &Store,
    id: &str,
    mut updates: BookingUpdate,
) -> Result<Booking, AppError> {
    let mut booking = store
        .get_booking(id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    let completing = updates.payment_status == Some(PaymentStatus::Completed);
    let payment_id = updates.payment_id.take();
    let order_id = updates.order_id.take();
    let status = updates.status.take();
    updates.payment_status = None;
    // Amounts are derived; they only change through reprice.
    updates.total_amount = None;
    updates.advance_amount = None;

    match status {
        None => {}
        Some(BookingStatus::Cancelled) => {}
        // The original client's verify payload sends status alongside the
        // payment fields; tolerate it when it agrees with the completion.
        Some(BookingStatus::Confirmed) if completing => {}
        Some(other) => {
            return Err(AppError::Validation(format!(
                "booking status cannot be set to '{}' directly",
                other.as_str()
            )));
        }
    }

    if !completing && payment_id.is_some() {
        return Err(AppError::Validation(
            "paymentId can only be set when completing payment".to_string(),
        ));
    }

    if has_field_edits(&updates) {
        booking = store
            .update_booking(id, updates)
            .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;
    }

    if completing {
        let payment_ref = payment_id.ok_or_else(|| {
            AppError::Validation("paymentId is required when completing payment".to_string())
        })?;
        booking = confirm_payment(store, id, &payment_ref, order_id.as_deref())?;
    } else if status == Some(BookingStatus::Cancelled) {
        booking = cancel_booking(store, id)?;
    }

    Ok(booking)
}

/// Recomputes the derived amounts from the stored package and add-ons.
/// Never triggered implicitly by an add-on edit.
pub fn reprice(store: &Store, id: &str) -> Result<Booking, AppError> {
    let booking = store
        .get_booking(id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    let quote = pricing::quote(booking.package_type.as_str(), &booking.add_ons)?;
    store
        .update_booking(
            id,
            BookingUpdate {
                total_amount: Some(quote.total),
                advance_amount: Some(quote.advance),
                ..Default::default()
            },
        )
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

fn has_field_edits(updates: &BookingUpdate) -> bool {
    updates.first_name.is_some()
        || updates.last_name.is_some()
        || updates.email.is_some()
        || updates.phone.is_some()
        || updates.event_date.is_some()
        || updates.event_time.is_some()
        || updates.event_type.is_some()
        || updates.event_location.is_some()
        || updates.add_ons.is_some()
        || updates.special_requirements.is_some()
}
