#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lead_enricher::ai::client::messages_to_json;
use lead_enricher::clients::{
    CompletionClient, OrganicResult, SearchClient, SearchResults, WebhookClient,
};
use lead_enricher::core::models::OutboundLead;
use lead_enricher::errors::LeadError;
use lead_enricher::pipeline::LeadPipeline;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;
use serde_json::Value;

/// Shared, ordered record of every outbound call the fakes receive.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn organic(title: Option<&str>, snippet: Option<&str>) -> OrganicResult {
    OrganicResult {
        title: title.map(str::to_string),
        snippet: snippet.map(str::to_string),
    }
}

pub struct FakeSearch {
    pub log: CallLog,
    pub results: Vec<OrganicResult>,
    pub fail_with: Option<String>,
    pub queries: Mutex<Vec<(String, u32)>>,
}

impl FakeSearch {
    pub fn new(log: &CallLog, results: Vec<OrganicResult>) -> Self {
        Self {
            log: log.clone(),
            results,
            fail_with: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: &CallLog, message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(log, Vec::new())
        }
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search(&self, query: &str, num: u32) -> Result<SearchResults, LeadError> {
        self.log.lock().unwrap().push("search".to_string());
        self.queries.lock().unwrap().push((query.to_string(), num));
        if let Some(message) = &self.fail_with {
            return Err(LeadError::HttpError(message.clone()));
        }
        Ok(SearchResults {
            organic_results: self.results.clone(),
        })
    }
}

pub struct FakeCompletion {
    pub log: CallLog,
    pub reply: Result<String, String>,
    pub prompts: Mutex<Vec<Vec<Value>>>,
}

impl FakeCompletion {
    pub fn replying(log: &CallLog, reply: &str) -> Self {
        Self {
            log: log.clone(),
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: &CallLog, message: &str) -> Self {
        Self {
            log: log.clone(),
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionClient for FakeCompletion {
    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, LeadError> {
        self.log.lock().unwrap().push("complete".to_string());
        self.prompts.lock().unwrap().push(messages_to_json(&messages));
        self.reply.clone().map_err(LeadError::OpenAIError)
    }
}

pub struct FakeWebhook {
    pub log: CallLog,
    pub reject: Option<(u16, String)>,
    pub sent: Mutex<Vec<OutboundLead>>,
}

impl FakeWebhook {
    pub fn accepting(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            reject: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(log: &CallLog, status: u16, body: &str) -> Self {
        Self {
            reject: Some((status, body.to_string())),
            ..Self::accepting(log)
        }
    }
}

#[async_trait]
impl WebhookClient for FakeWebhook {
    async fn forward(&self, lead: &OutboundLead) -> Result<(), LeadError> {
        self.log.lock().unwrap().push("forward".to_string());
        self.sent.lock().unwrap().push(lead.clone());
        match &self.reject {
            Some((status, body)) => Err(LeadError::WebhookRejected {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Fakes wired into a pipeline, kept alongside so tests can inspect them.
pub struct Harness {
    pub log: CallLog,
    pub search: Arc<FakeSearch>,
    pub completion: Arc<FakeCompletion>,
    pub webhook: Arc<FakeWebhook>,
}

impl Harness {
    pub fn new(
        log: CallLog,
        search: FakeSearch,
        completion: FakeCompletion,
        webhook: FakeWebhook,
    ) -> Self {
        Self {
            log,
            search: Arc::new(search),
            completion: Arc::new(completion),
            webhook: Arc::new(webhook),
        }
    }

    /// A harness whose services all succeed.
    pub fn happy(results: Vec<OrganicResult>, reply: &str) -> Self {
        let log = new_log();
        let search = FakeSearch::new(&log, results);
        let completion = FakeCompletion::replying(&log, reply);
        let webhook = FakeWebhook::accepting(&log);
        Self::new(log, search, completion, webhook)
    }

    pub fn pipeline(&self) -> LeadPipeline {
        LeadPipeline::new(
            self.search.clone(),
            self.completion.clone(),
            self.webhook.clone(),
        )
    }

    pub fn sent(&self) -> Vec<OutboundLead> {
        self.webhook.sent.lock().unwrap().clone()
    }

    pub fn user_prompt(&self) -> String {
        let prompts = self.completion.prompts.lock().unwrap();
        prompts[0][1]["content"].as_str().unwrap().to_string()
    }
}
