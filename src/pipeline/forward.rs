use tracing::error;

use crate::clients::WebhookClient;
use crate::core::models::{Lead, OutboundLead};
use crate::errors::LeadError;

/// Sends the enriched lead downstream. On failure the generated message is
/// logged and dropped; nothing is queued for redelivery.
pub async fn forward_lead(
    webhook: &dyn WebhookClient,
    lead: &Lead,
    custom_message: String,
) -> Result<OutboundLead, LeadError> {
    let outbound = OutboundLead::new(lead, custom_message);

    if let Err(e) = webhook.forward(&outbound).await {
        error!(
            linkedin_url = %outbound.linkedin_url,
            discarded_message = %outbound.custom_message,
            "Dropping generated message after forwarding failure: {}",
            e
        );
        return Err(e);
    }

    Ok(outbound)
}
