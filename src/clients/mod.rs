//! Client modules for external API interactions
//!
//! Each outbound service sits behind a small trait so the pipeline can be
//! driven by fakes in tests.

pub mod search_client;
pub mod webhook_client;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;

use crate::core::models::OutboundLead;
use crate::errors::LeadError;

pub use search_client::{OrganicResult, SearchResults, SerpApiClient};
pub use webhook_client::ForwardingClient;

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Runs a single web search and returns at most `num` organic results.
    async fn search(&self, query: &str, num: u32) -> Result<SearchResults, LeadError>;
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a chat conversation and returns the text of the first choice.
    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, LeadError>;
}

#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn forward(&self, lead: &OutboundLead) -> Result<(), LeadError>;
}
