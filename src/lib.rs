/// Lead Enricher - A webhook relay that personalizes outreach for incoming leads.
///
/// Each lead delivered to `POST /incoming-expandi-lead` goes through three
/// sequential steps:
/// 1. A web search for the lead's public profile (headline and summary)
/// 2. An `OpenAI` chat completion that writes a short connection message
/// 3. A POST of the enriched lead to the downstream automation webhook
///
/// # Architecture
///
/// The system uses:
/// - actix-web for the inbound HTTP endpoint
/// - reqwest for the three outbound calls
/// - openai-api-rs message types for building the chat prompt
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use lead_enricher::core::config::AppConfig;
/// use lead_enricher::core::models::IncomingLead;
/// use lead_enricher::pipeline::LeadPipeline;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     lead_enricher::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let pipeline = LeadPipeline::from_config(&config)?;
///
///     let lead = IncomingLead {
///         first_name: Some("Jane".into()),
///         company_name: Some("Acme".into()),
///         profile_link: Some("https://linkedin.com/in/jane".into()),
///     }
///     .into_lead()?;
///
///     let forwarded = pipeline.process(&lead).await?;
///     println!("Sent: {}", forwarded.custom_message);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod pipeline;

/// Configure structured logging with JSON format.
///
/// Verbosity follows `RUST_LOG`, defaulting to `lead_enricher=info`. Calling
/// this more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// lead_enricher::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lead_enricher=info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
