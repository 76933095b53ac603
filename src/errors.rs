use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Missing essential fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Failed to parse incoming lead: {0}")]
    InvalidPayload(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access search API: {0}")]
    SearchError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Forwarding webhook rejected lead (status {status}): {body}")]
    WebhookRejected { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LeadError {
    /// Validation failures are acknowledged with a 200 so the sender does not
    /// keep redelivering a payload that can never succeed.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, LeadError::MissingFields(_))
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_validation() { 200 } else { 500 }
    }
}

impl From<reqwest::Error> for LeadError {
    fn from(error: reqwest::Error) -> Self {
        LeadError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for LeadError {
    fn from(error: serde_json::Error) -> Self {
        LeadError::InvalidPayload(error.to_string())
    }
}
