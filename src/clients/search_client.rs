//! Web search (`SerpApi`) client module

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::SearchClient;
use crate::errors::LeadError;

const SEARCH_ENGINE: &str = "google";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

pub struct SerpApiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    #[must_use]
    pub fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/search.json", self.base_url)
    }
}

#[async_trait]
impl SearchClient for SerpApiClient {
    async fn search(&self, query: &str, num: u32) -> Result<SearchResults, LeadError> {
        info!(query = %query, "Searching for public profile");

        let num = num.to_string();
        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // An error reply still carries a JSON body; without organic results
        // the lookup falls back to the default profile.
        if !status.is_success() {
            warn!(
                "Search API returned status {}: {}",
                status.as_u16(),
                body
            );
        }

        let results: SearchResults = serde_json::from_str(&body).map_err(|e| {
            LeadError::SearchError(format!(
                "Failed to parse search response (status {}): {e}",
                status.as_u16()
            ))
        })?;

        debug!(
            "Search returned {} organic results",
            results.organic_results.len()
        );

        Ok(results)
    }
}
