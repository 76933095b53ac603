use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{error, info};

use super::WebhookClient;
use crate::core::models::OutboundLead;
use crate::errors::LeadError;

/// Posts enriched leads to the downstream automation webhook.
pub struct ForwardingClient {
    http: Client,
    webhook_url: String,
}

impl ForwardingClient {
    #[must_use]
    pub fn new(http: Client, webhook_url: String) -> Self {
        Self { http, webhook_url }
    }
}

#[async_trait]
impl WebhookClient for ForwardingClient {
    async fn forward(&self, lead: &OutboundLead) -> Result<(), LeadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .http
            .post(&self.webhook_url)
            .headers(headers)
            .json(lead)
            .send()
            .await?;

        // Only a plain 200 counts as accepted.
        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "Forwarding webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(LeadError::WebhookRejected {
                status: status.as_u16(),
                body: body_text,
            });
        }

        info!(linkedin_url = %lead.linkedin_url, "Lead forwarded");
        Ok(())
    }
}
