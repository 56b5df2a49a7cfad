use anyhow::Context;
use async_trait::async_trait;

use super::EmailProvider;

pub struct SendGridMailer {
    api_key: String,
    from_email: String,
    client: reqwest::Client,
}

impl SendGridMailer {
    pub fn new(api_key: String, from_email: String) -> Self {
        Self {
            api_key,
            from_email,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for SendGridMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        let body = serde_json::json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from_email },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html }],
        });

        self.client
            .post("https://api.sendgrid.com/v3/mail/send")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to reach SendGrid")?
            .error_for_status()
            .context("SendGrid API returned error")?;

        Ok(())
    }
}
