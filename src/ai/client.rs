//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call used to write outreach messages.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::clients::CompletionClient;
use crate::errors::LeadError;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

fn role_str(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::system => "system",
        MessageRole::user => "user",
        MessageRole::assistant => "assistant",
        MessageRole::function => "function",
        MessageRole::tool => "tool",
    }
}

fn content_text(content: &Content) -> String {
    match content {
        Content::Text(text) => text.clone(),
        _ => String::new(),
    }
}

/// Converts chat messages into the JSON shape of the chat-completions API.
#[must_use]
pub fn messages_to_json(messages: &[ChatCompletionMessage]) -> Vec<Value> {
    messages
        .iter()
        .map(|msg| {
            json!({
                "role": role_str(&msg.role),
                "content": content_text(&msg.content)
            })
        })
        .collect()
}

/// Pulls the trimmed text of the first choice out of a chat-completions response.
pub fn first_choice_text(response_json: &Value) -> Result<String, LeadError> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| LeadError::OpenAIError("No text in response".to_string()))
}

/// LLM API client for generating outreach messages
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        http: Client,
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        base_url: String,
    ) -> Self {
        Self {
            http,
            api_key,
            org_id,
            model_name,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for LlmClient {
    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, LeadError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", messages);

        let input_messages = messages_to_json(&messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting completion from {} with {} messages (~{} input tokens)",
            self.model_name,
            input_messages.len(),
            messages
                .iter()
                .map(|msg| estimate_tokens(&content_text(&msg.content)))
                .sum::<usize>()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": input_messages,
        });

        let mut request = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LeadError::HttpError(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LeadError::OpenAIError(format!(
                "OpenAI API error: {}",
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            LeadError::OpenAIError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        first_choice_text(&response_json)
    }
}
