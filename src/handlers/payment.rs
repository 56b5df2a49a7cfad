use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::payment::{self, PayableReference};
use crate::state::AppState;

// POST /api/payment/create-qr
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQrRequest {
    pub booking_id: String,
    pub amount: i64,
}

pub async fn create_qr(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQrRequest>,
) -> Result<Json<PayableReference>, AppError> {
    let payable = payment::request_payment(&state, &req.booking_id, req.amount).await?;
    Ok(Json(payable))
}

// POST /api/payment/verify
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub transaction_id: String,
    pub booking_id: String,
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let success = payment::verify_payment(&state, &req.transaction_id, &req.booking_id).await?;
    Ok(Json(serde_json::json!({ "success": success })))
}

// POST /api/payment/simulate-success
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub booking_id: String,
    pub transaction_id: String,
}

pub async fn simulate_success(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    payment::simulate_success(&state, &req.booking_id, &req.transaction_id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
