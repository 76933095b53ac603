use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::LeadError;

/// Stand-in last name when the upstream tool did not send a company.
pub const DEFAULT_LAST_NAME: &str = "Professional";

/// Lead notification as delivered by the upstream lead-generation tool.
///
/// Every field is optional at this stage; validation happens in
/// [`IncomingLead::into_lead`]. Fields that are not JSON strings are read as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingLead {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub profile_link: Option<String>,
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A lead that passed validation and can go through enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub linkedin_url: String,
}

impl IncomingLead {
    pub fn into_lead(self) -> Result<Lead, LeadError> {
        let first_name = non_empty(self.first_name);
        let linkedin_url = non_empty(self.profile_link);

        let mut missing = Vec::new();
        if first_name.is_none() {
            missing.push("first_name");
        }
        if linkedin_url.is_none() {
            missing.push("profile_link");
        }

        match (first_name, linkedin_url) {
            (Some(first_name), Some(linkedin_url)) => Ok(Lead {
                first_name,
                last_name: non_empty(self.company_name)
                    .unwrap_or_else(|| DEFAULT_LAST_NAME.to_string()),
                linkedin_url,
            }),
            _ => Err(LeadError::MissingFields(missing)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Public profile details found for a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub headline: String,
    pub summary: String,
}

impl ProfileInfo {
    pub const FALLBACK_HEADLINE: &'static str = "Professional";
    pub const FALLBACK_SUMMARY: &'static str = "Experienced professional in their field.";

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            headline: Self::FALLBACK_HEADLINE.to_string(),
            summary: Self::FALLBACK_SUMMARY.to_string(),
        }
    }
}

/// Payload posted to the forwarding webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundLead {
    pub first_name: String,
    pub last_name: String,
    pub linkedin_url: String,
    pub custom_message: String,
}

impl OutboundLead {
    #[must_use]
    pub fn new(lead: &Lead, custom_message: String) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            linkedin_url: lead.linkedin_url.clone(),
            custom_message,
        }
    }
}
