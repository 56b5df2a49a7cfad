use crate::config::AppConfig;
use crate::services::gateway::PaymentGateway;
use crate::services::notify::EmailProvider;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
    pub gateway: Box<dyn PaymentGateway>,
    /// None when no email credentials are configured; notifications become
    /// logged no-ops.
    pub mailer: Option<Box<dyn EmailProvider>>,
}
