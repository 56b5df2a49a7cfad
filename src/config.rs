use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub payment_provider: String,
    pub upi_vpa: String,
    pub upi_payee_name: String,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub sendgrid_api_key: String,
    pub from_email: String,
    pub admin_email: String,
    pub demo_mode: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            payment_provider: env::var("PAYMENT_PROVIDER").unwrap_or_else(|_| "upi".to_string()),
            upi_vpa: env::var("UPI_VPA").unwrap_or_default(),
            upi_payee_name: env::var("UPI_PAYEE_NAME")
                .unwrap_or_else(|_| "ShootXpress".to_string()),
            razorpay_key_id: env::var("RAZORPAY_KEY_ID").unwrap_or_default(),
            razorpay_key_secret: env::var("RAZORPAY_KEY_SECRET").unwrap_or_default(),
            sendgrid_api_key: env::var("SENDGRID_API_KEY").unwrap_or_default(),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "info@shootxpress.com".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@shootxpress.com".to_string()),
            demo_mode: env::var("DEMO_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
