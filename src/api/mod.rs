//! HTTP API: inbound webhook routes and server startup

pub mod handler;
pub mod helpers;

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::LeadError;
use crate::pipeline::LeadPipeline;

// Re-export the routes for convenience
pub use handler::{health, incoming_lead};

pub struct AppState {
    pub pipeline: LeadPipeline,
}

impl AppState {
    #[must_use]
    pub fn new(pipeline: LeadPipeline) -> Self {
        Self { pipeline }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, LeadError> {
        Ok(Self::new(LeadPipeline::from_config(config)?))
    }
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(incoming_lead).service(health);
}

pub async fn startup(config: AppConfig) -> std::io::Result<()> {
    let app_state = web::Data::new(
        AppState::from_config(&config).map_err(|e| std::io::Error::other(e.to_string()))?,
    );

    info!(
        model = %config.model_name(),
        "Serving lead webhook on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || App::new().app_data(app_state.clone()).configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
