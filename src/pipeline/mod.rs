//! Lead enrichment pipeline: profile lookup, message generation, forwarding.
//!
//! The three steps always run in that order and each external call is made
//! exactly once per lead.

pub mod forward;
pub mod lookup;
pub mod message;

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::ai::LlmClient;
use crate::clients::{
    CompletionClient, ForwardingClient, SearchClient, SerpApiClient, WebhookClient,
};
use crate::core::config::AppConfig;
use crate::core::models::{Lead, OutboundLead};
use crate::errors::LeadError;

pub use forward::forward_lead;
pub use lookup::{lookup_profile, profile_query};
pub use message::generate_message;

#[derive(Clone)]
pub struct LeadPipeline {
    search: Arc<dyn SearchClient>,
    completion: Arc<dyn CompletionClient>,
    webhook: Arc<dyn WebhookClient>,
    pitch: Option<String>,
}

impl LeadPipeline {
    pub fn new(
        search: Arc<dyn SearchClient>,
        completion: Arc<dyn CompletionClient>,
        webhook: Arc<dyn WebhookClient>,
    ) -> Self {
        Self {
            search,
            completion,
            webhook,
            pitch: None,
        }
    }

    #[must_use]
    pub fn with_pitch(mut self, pitch: Option<String>) -> Self {
        self.pitch = pitch;
        self
    }

    /// Wires the real HTTP clients from configuration, sharing one connection pool.
    pub fn from_config(config: &AppConfig) -> Result<Self, LeadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LeadError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        let search = SerpApiClient::new(
            http.clone(),
            config.serpapi_api_key.clone(),
            config.serpapi_base_url.clone(),
        );
        let completion = LlmClient::new(
            http.clone(),
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model_name().to_string(),
            config.openai_base_url.clone(),
        );
        let webhook = ForwardingClient::new(http, config.webhook_url.clone());

        Ok(
            Self::new(Arc::new(search), Arc::new(completion), Arc::new(webhook))
                .with_pitch(config.outreach_pitch.clone()),
        )
    }

    pub async fn process(&self, lead: &Lead) -> Result<OutboundLead, LeadError> {
        let profile =
            lookup_profile(self.search.as_ref(), &lead.first_name, &lead.last_name).await?;
        info!(headline = %profile.headline, "Profile lookup complete");

        let message = generate_message(
            self.completion.as_ref(),
            lead,
            &profile,
            self.pitch.as_deref(),
        )
        .await?;
        info!("Generated outreach message ({} chars)", message.chars().count());

        forward_lead(self.webhook.as_ref(), lead, message).await
    }
}
