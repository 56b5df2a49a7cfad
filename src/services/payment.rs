use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking as lifecycle;
use crate::state::AppState;

/// Advisory validity window for a payable reference; the client counts this
/// down, the server does not enforce it.
pub const PAYABLE_VALIDITY_SECS: u64 = 1800;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableReference {
    pub success: bool,
    pub transaction_id: String,
    pub amount: i64,
    pub reference: String,
    pub expires_in: u64,
}

/// Obtains a payable reference from the gateway and moves the booking to
/// payment-requested. Gateway failure leaves the booking untouched.
pub async fn request_payment(
    state: &AppState,
    booking_id: &str,
    amount: i64,
) -> Result<PayableReference, AppError> {
    if amount <= 0 {
        return Err(AppError::Validation("invalid amount".to_string()));
    }

    if state.store.get_booking(booking_id).is_none() {
        return Err(AppError::NotFound(format!("booking {booking_id}")));
    }

    let transaction_id = format!("TX-{}", Uuid::new_v4());
    let reference = state
        .gateway
        .create_payable(amount, &transaction_id)
        .await
        .map_err(|e| AppError::GatewayUnavailable(e.to_string()))?;

    lifecycle::mark_payment_requested(&state.store, booking_id)?;
    tracing::info!(booking_id = %booking_id, transaction_id = %transaction_id, "payment requested");

    Ok(PayableReference {
        success: true,
        transaction_id,
        amount,
        reference,
        expires_in: PAYABLE_VALIDITY_SECS,
    })
}

/// Asks the gateway whether the transaction settled. Settled payments drive
/// the booking into `confirmed`; unsettled ones leave it unchanged so the
/// client can retry.
pub async fn verify_payment(
    state: &AppState,
    transaction_id: &str,
    booking_id: &str,
) -> Result<bool, AppError> {
    let settled = state
        .gateway
        .check_status(transaction_id)
        .await
        .map_err(|e| AppError::GatewayUnavailable(e.to_string()))?;

    if !settled {
        return Ok(false);
    }

    lifecycle::confirm_payment(&state.store, booking_id, transaction_id, None)?;
    Ok(true)
}

/// Demo-only bypass: confirms the booking without consulting the gateway.
/// Hard-gated behind DEMO_MODE; never reachable in a production configuration.
pub fn simulate_success(
    state: &AppState,
    booking_id: &str,
    transaction_id: &str,
) -> Result<Booking, AppError> {
    if !state.config.demo_mode {
        return Err(AppError::DemoDisabled);
    }

    tracing::warn!(booking_id = %booking_id, "payment confirmed via demo bypass");
    lifecycle::confirm_payment(&state.store, booking_id, transaction_id, None)
}
