//! Outbound email notifications
//!
//! Thin client for an external transactional mail API. Delivery is
//! fire-and-forget: failures are logged and never surfaced to the
//! request that triggered the message.

use serde::Serialize;

use crate::config::EmailConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the external transactional mail API.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: String,
    from_address: String,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

impl Mailer {
    pub fn new(config: &EmailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        }
    }

    /// Queue a message for delivery without waiting on the result.
    pub fn send_async(&self, to: String, subject: String, body: String) {
        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, &subject, &body).await {
                tracing::warn!(to = %to, subject = %subject, "Failed to send email: {}", e);
            }
        });
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), reqwest::Error> {
        let Some(url) = &self.api_url else {
            tracing::debug!(to = %to, "Mail API not configured, dropping email");
            return Ok(());
        };

        let payload = MailRequest {
            from: &self.from_address,
            to,
            subject,
            body,
        };

        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(to = %to, subject = %subject, "Email dispatched");
        Ok(())
    }
}
