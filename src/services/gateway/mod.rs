pub mod razorpay;
pub mod upi;

use async_trait::async_trait;

/// Abstract payment capability. `create_payable` returns an opaque reference
/// the customer pays against (a UPI QR payload, a gateway order id);
/// `check_status` reports whether the transaction has settled.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payable(&self, amount: i64, order_id: &str) -> anyhow::Result<String>;
    async fn check_status(&self, transaction_id: &str) -> anyhow::Result<bool>;
}
