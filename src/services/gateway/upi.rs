use anyhow::ensure;
use async_trait::async_trait;

use super::PaymentGateway;

/// UPI QR variant: the payable reference is a `upi://pay` deep link, which the
/// client renders as a scannable QR code. Payment happens out-of-band in the
/// customer's UPI app.
pub struct UpiQrGateway {
    payee_vpa: String,
    payee_name: String,
}

impl UpiQrGateway {
    pub fn new(payee_vpa: String, payee_name: String) -> Self {
        Self {
            payee_vpa,
            payee_name,
        }
    }
}

#[async_trait]
impl PaymentGateway for UpiQrGateway {
    async fn create_payable(&self, amount: i64, order_id: &str) -> anyhow::Result<String> {
        ensure!(!self.payee_vpa.is_empty(), "UPI_VPA is not configured");

        Ok(format!(
            "upi://pay?pa={}&pn={}&am={}&tr={}&cu=INR",
            self.payee_vpa, self.payee_name, amount, order_id
        ))
    }

    async fn check_status(&self, transaction_id: &str) -> anyhow::Result<bool> {
        // A static UPI QR has no settlement API to poll. Confirmation for this
        // variant arrives through the demo bypass or a manual reconciliation.
        tracing::warn!(
            transaction_id = %transaction_id,
            "UPI gateway cannot verify settlement; reporting unsettled"
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_payable_is_upi_link() {
        let gw = UpiQrGateway::new("studio@ybl".to_string(), "ShootXpress".to_string());
        let reference = gw.create_payable(1375, "TX-abc").await.unwrap();
        assert!(reference.starts_with("upi://pay?"));
        assert!(reference.contains("pa=studio@ybl"));
        assert!(reference.contains("am=1375"));
        assert!(reference.contains("tr=TX-abc"));
    }

    #[tokio::test]
    async fn test_missing_vpa_fails() {
        let gw = UpiQrGateway::new(String::new(), "ShootXpress".to_string());
        assert!(gw.create_payable(1375, "TX-abc").await.is_err());
    }

    #[tokio::test]
    async fn test_status_is_unsettled() {
        let gw = UpiQrGateway::new("studio@ybl".to_string(), "ShootXpress".to_string());
        assert!(!gw.check_status("TX-abc").await.unwrap());
    }
}
