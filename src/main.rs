use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use shootxpress::config::AppConfig;
use shootxpress::handlers;
use shootxpress::services::gateway::razorpay::RazorpayGateway;
use shootxpress::services::gateway::upi::UpiQrGateway;
use shootxpress::services::gateway::PaymentGateway;
use shootxpress::services::notify::sendgrid::SendGridMailer;
use shootxpress::services::notify::EmailProvider;
use shootxpress::state::AppState;
use shootxpress::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = Store::new();
    store.seed_portfolio();

    let gateway: Box<dyn PaymentGateway> = match config.payment_provider.as_str() {
        "razorpay" => {
            if config.razorpay_key_id.is_empty() {
                tracing::warn!("Razorpay credentials not configured; payment requests will fail");
            }
            tracing::info!("using Razorpay payment gateway");
            Box::new(RazorpayGateway::new(
                config.razorpay_key_id.clone(),
                config.razorpay_key_secret.clone(),
            ))
        }
        _ => {
            if config.upi_vpa.is_empty() {
                tracing::warn!("UPI_VPA not configured; payment requests will fail");
            }
            tracing::info!("using UPI QR payment gateway");
            Box::new(UpiQrGateway::new(
                config.upi_vpa.clone(),
                config.upi_payee_name.clone(),
            ))
        }
    };

    let mailer: Option<Box<dyn EmailProvider>> = if config.sendgrid_api_key.is_empty() {
        tracing::warn!("SENDGRID_API_KEY not set; email notifications disabled");
        None
    } else {
        Some(Box::new(SendGridMailer::new(
            config.sendgrid_api_key.clone(),
            config.from_email.clone(),
        )))
    };

    if config.demo_mode {
        tracing::warn!("DEMO_MODE enabled; the payment simulation endpoint is live");
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState {
        store,
        config: config.clone(),
        gateway,
        mailer,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route(
            "/api/bookings/:id",
            patch(handlers::bookings::update_booking),
        )
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::bookings::cancel_booking),
        )
        .route("/api/contacts", post(handlers::contacts::create_contact))
        .route("/api/contacts", get(handlers::contacts::list_contacts))
        .route("/api/portfolio", get(handlers::portfolio::list_portfolio))
        .route("/api/payment/create-qr", post(handlers::payment::create_qr))
        .route("/api/payment/verify", post(handlers::payment::verify))
        .route(
            "/api/payment/simulate-success",
            post(handlers::payment::simulate_success),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
