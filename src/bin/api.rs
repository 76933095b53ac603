use anyhow::Context;
use lead_enricher::core::config::AppConfig;
use tracing::error;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    lead_enricher::setup_logging();

    let config = AppConfig::from_env()
        .map_err(|e| {
            error!("Config error: {}", e);
            anyhow::anyhow!(e)
        })
        .context("loading configuration")?;

    lead_enricher::api::startup(config)
        .await
        .context("running HTTP server")
}
