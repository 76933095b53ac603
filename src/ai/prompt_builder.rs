use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::{Lead, ProfileInfo};

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant writing LinkedIn connection messages.";

/// Closing sentence appended to every outreach message unless overridden.
pub const DEFAULT_PITCH: &str = "Golden West specializes in providing high-performance human \
    biological matrices for assay development and biomarker controls";

#[must_use]
pub fn build_outreach_prompt(lead: &Lead, profile: &ProfileInfo, pitch: Option<&str>) -> String {
    let pitch = pitch
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PITCH)
        .trim_end_matches('.');

    format!(
        "Write a short, friendly LinkedIn connection message to {} {}. \
         Their LinkedIn headline is: \"{}\". \
         Their About section says: \"{}\". \
         Keep the message 1–2 sentences. \
         At the end, mention that {}. \
         Make it sound casual, professional, and conversational, not robotic.",
        lead.first_name,
        lead.last_name,
        profile.headline,
        profile.summary,
        pitch,
    )
}

/// Two-message conversation: the fixed system role and the outreach prompt.
#[must_use]
pub fn build_outreach_messages(
    lead: &Lead,
    profile: &ProfileInfo,
    pitch: Option<&str>,
) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(build_outreach_prompt(lead, profile, pitch)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
