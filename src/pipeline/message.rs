use crate::ai::prompt_builder::build_outreach_messages;
use crate::clients::CompletionClient;
use crate::core::models::{Lead, ProfileInfo};
use crate::errors::LeadError;

pub async fn generate_message(
    completion: &dyn CompletionClient,
    lead: &Lead,
    profile: &ProfileInfo,
    pitch: Option<&str>,
) -> Result<String, LeadError> {
    let prompt = build_outreach_messages(lead, profile, pitch);
    completion.complete(prompt).await
}
