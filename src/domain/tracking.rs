//! Tracking triple attached to every annotated link.

use serde::Serialize;

/// Query key for the traffic source.
pub const UTM_SOURCE: &str = "utm_source";
/// Query key for the marketing medium.
pub const UTM_MEDIUM: &str = "utm_medium";
/// Query key for the campaign name.
pub const UTM_CAMPAIGN: &str = "utm_campaign";

/// The `(source, medium, campaign)` values for one transform invocation.
///
/// Values are stored verbatim; encoding happens when they are written into a
/// query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
}

impl TrackingParams {
    /// Creates a new tracking triple.
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            medium: medium.into(),
            campaign: campaign.into(),
        }
    }

    /// Returns the UTM key/value pairs in the order they are merged into a query.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (UTM_SOURCE, self.source.as_str()),
            (UTM_MEDIUM, self.medium.as_str()),
            (UTM_CAMPAIGN, self.campaign.as_str()),
        ]
    }
}
