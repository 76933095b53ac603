//! Inbound webhook handler.
//!
//! This module handles:
//! - Payload parsing and required-field validation
//! - Running the enrichment pipeline for valid leads
//! - Mapping pipeline errors to HTTP responses

use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::AppState;
use super::helpers;
use crate::core::models::IncomingLead;
use crate::errors::LeadError;

pub const SUCCESS_STATUS: &str = "success";
pub const MISSING_FIELDS_STATUS: &str = "Webhook received, but missing essential fields";

/// Parses the raw request body into an [`IncomingLead`]. The body must be a
/// JSON object.
pub fn parse_incoming_lead(body: &[u8]) -> Result<IncomingLead, LeadError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(LeadError::InvalidPayload(
            "expected a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[post("/incoming-expandi-lead")]
pub async fn incoming_lead(body: web::Bytes, state: web::Data<AppState>) -> HttpResponse {
    let correlation_id = Uuid::new_v4();
    let span = info_span!("incoming_lead", correlation_id = %correlation_id);

    async move {
        match process_body(&state, &body).await {
            Ok(()) => helpers::ok_status(SUCCESS_STATUS),
            Err(e) if e.is_validation() => {
                warn!("Skipping lead: {}", e);
                helpers::ok_status(MISSING_FIELDS_STATUS)
            }
            Err(e) => {
                error!("Error: {}", e);
                helpers::err_response(e.status_code(), &e.to_string())
            }
        }
    }
    .instrument(span)
    .await
}

async fn process_body(state: &AppState, body: &[u8]) -> Result<(), LeadError> {
    let lead = parse_incoming_lead(body)?.into_lead()?;
    info!(
        first_name = %lead.first_name,
        last_name = %lead.last_name,
        linkedin_url = %lead.linkedin_url,
        "Received lead"
    );

    state.pipeline.process(&lead).await?;
    info!("Lead processed successfully");
    Ok(())
}

#[get("/health")]
pub async fn health() -> impl Responder {
    helpers::ok_status("ok")
}
