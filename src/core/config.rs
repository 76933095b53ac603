use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub serpapi_api_key: String,
    pub serpapi_base_url: String,
    pub webhook_url: String,
    pub outreach_pitch: Option<String>,
    pub host: String,
    pub port: u16,
    pub http_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests can
    /// inject values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{key}: environment variable not found"))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let webhook_url = required("EXPANDI_WEBHOOK_URL")?;
        validate_http_url("EXPANDI_WEBHOOK_URL", &webhook_url)?;

        let openai_base_url =
            optional("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        validate_http_url("OPENAI_BASE_URL", &openai_base_url)?;

        let serpapi_base_url =
            optional("SERPAPI_BASE_URL").unwrap_or_else(|| DEFAULT_SERPAPI_BASE_URL.to_string());
        validate_http_url("SERPAPI_BASE_URL", &serpapi_base_url)?;

        let port = match optional("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {e}"))?,
            None => DEFAULT_PORT,
        };

        let http_timeout = match optional("HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("HTTP_TIMEOUT_SECS: {e}"))?,
            )),
            None => None,
        };

        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: optional("OPENAI_ORG_ID"),
            openai_model: optional("OPENAI_MODEL"),
            openai_base_url: trim_trailing_slash(openai_base_url),
            serpapi_api_key: required("SERPAPI_API_KEY")?,
            serpapi_base_url: trim_trailing_slash(serpapi_base_url),
            webhook_url,
            outreach_pitch: optional("OUTREACH_PITCH"),
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            http_timeout,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }
}

fn validate_http_url(key: &str, raw: &str) -> Result<(), String> {
    let parsed = Url::parse(raw).map_err(|e| format!("{key}: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{key}: unsupported scheme '{other}'")),
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
