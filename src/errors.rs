use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,

    #[error("unknown package type: {0}")]
    InvalidPackageType(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("payment conflict: {0}")]
    PaymentConflict(String),

    #[error("payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    #[error("payment simulation is disabled")]
    DemoDisabled,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-checkable kind carried in every error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::TermsNotAccepted => "terms_not_accepted",
            AppError::InvalidPackageType(_) => "invalid_package_type",
            AppError::NotFound(_) => "not_found",
            AppError::PaymentConflict(_) => "payment_conflict",
            AppError::GatewayUnavailable(_) => "gateway_unavailable",
            AppError::DemoDisabled => "demo_disabled",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = Vec::new();
        for (field, errs) in errors.field_errors() {
            for err in errs {
                match &err.message {
                    Some(msg) => messages.push(msg.to_string()),
                    None => messages.push(format!("{field} is invalid")),
                }
            }
        }
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TermsNotAccepted => StatusCode::BAD_REQUEST,
            AppError::InvalidPackageType(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PaymentConflict(_) => StatusCode::CONFLICT,
            AppError::GatewayUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::DemoDisabled => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // 500s get a generic message; the detail stays in the server log.
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({ "error": self.kind(), "message": message });
        (status, axum::Json(body)).into_response()
    }
}
