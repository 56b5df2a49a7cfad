use anyhow::{ensure, Context};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use super::PaymentGateway;

const API_BASE: &str = "https://api.razorpay.com/v1";

/// Order-based variant: creates a Razorpay order and polls payment status.
/// Amounts are rupees on our side, paise on the wire.
pub struct RazorpayGateway {
    key_id: String,
    key_secret: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct OrderResponse {
    id: String,
}

#[derive(Deserialize)]
struct PaymentResponse {
    status: String,
}

impl RazorpayGateway {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self {
            key_id,
            key_secret,
            client: reqwest::Client::new(),
        }
    }

    /// Checks the `order_id|payment_id` HMAC-SHA256 signature Razorpay sends
    /// with checkout callbacks.
    pub fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let mut mac = match Hmac::<Sha256>::new_from_slice(self.key_secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(format!("{order_id}|{payment_id}").as_bytes());
        let expected: String = mac
            .finalize()
            .into_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        expected == signature
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_payable(&self, amount: i64, order_id: &str) -> anyhow::Result<String> {
        ensure!(
            !self.key_id.is_empty() && !self.key_secret.is_empty(),
            "Razorpay credentials are not configured"
        );

        let body = serde_json::json!({
            "amount": amount * 100,
            "currency": "INR",
            "receipt": order_id,
        });

        let order: OrderResponse = self
            .client
            .post(format!("{API_BASE}/orders"))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&body)
            .send()
            .await
            .context("failed to reach Razorpay")?
            .error_for_status()
            .context("Razorpay order creation failed")?
            .json()
            .await
            .context("invalid Razorpay order response")?;

        Ok(order.id)
    }

    async fn check_status(&self, transaction_id: &str) -> anyhow::Result<bool> {
        ensure!(
            !self.key_id.is_empty() && !self.key_secret.is_empty(),
            "Razorpay credentials are not configured"
        );

        let payment: PaymentResponse = self
            .client
            .get(format!("{API_BASE}/payments/{transaction_id}"))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .send()
            .await
            .context("failed to reach Razorpay")?
            .error_for_status()
            .context("Razorpay payment lookup failed")?
            .json()
            .await
            .context("invalid Razorpay payment response")?;

        Ok(payment.status == "captured")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_roundtrip() {
        let gw = RazorpayGateway::new("key".to_string(), "secret".to_string());

        let mut mac = Hmac::<Sha256>::new_from_slice(b"secret").unwrap();
        mac.update(b"order_1|pay_1");
        let sig: String = mac
            .finalize()
            .into_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();

        assert!(gw.verify_signature("order_1", "pay_1", &sig));
        assert!(!gw.verify_signature("order_1", "pay_2", &sig));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_fast() {
        let gw = RazorpayGateway::new(String::new(), String::new());
        assert!(gw.create_payable(1375, "TX-abc").await.is_err());
        assert!(gw.check_status("pay_1").await.is_err());
    }
}
