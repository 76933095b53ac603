use tracing::info;

use crate::clients::SearchClient;
use crate::core::models::ProfileInfo;
use crate::errors::LeadError;

#[must_use]
pub fn profile_query(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name} LinkedIn")
}

/// Looks up a public profile for the given name using the top search hit.
///
/// An empty result set yields [`ProfileInfo::fallback`]; only a failure of the
/// search call itself is returned as an error.
pub async fn lookup_profile(
    search: &dyn SearchClient,
    first_name: &str,
    last_name: &str,
) -> Result<ProfileInfo, LeadError> {
    let results = search
        .search(&profile_query(first_name, last_name), 1)
        .await?;

    let Some(first) = results.organic_results.into_iter().next() else {
        info!("No organic results, using fallback profile");
        return Ok(ProfileInfo::fallback());
    };

    Ok(ProfileInfo {
        headline: first
            .title
            .unwrap_or_else(|| ProfileInfo::FALLBACK_HEADLINE.to_string()),
        summary: first
            .snippet
            .unwrap_or_else(|| ProfileInfo::FALLBACK_SUMMARY.to_string()),
    })
}
