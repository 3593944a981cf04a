//! Tagging service bound to one tracking triple.

use url::Url;

use crate::application::tagging::{
    add_utm_to_all_urls, add_utm_to_parsed_url, add_utm_to_url, tag_document,
};
use crate::domain::{DocumentProcessor, TaggedDocument, TrackingParams};
use crate::error::UtmError;

/// Annotates URLs and documents with a fixed set of tracking parameters.
///
/// Holds no state besides the triple, so one instance can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct UtmTagger {
    params: TrackingParams,
}

impl UtmTagger {
    /// Creates a new tagger.
    pub fn new(params: TrackingParams) -> Self {
        Self { params }
    }

    /// Returns the tracking triple applied by this tagger.
    pub fn params(&self) -> &TrackingParams {
        &self.params
    }

    /// Annotates a single raw URL.
    ///
    /// # Errors
    ///
    /// Returns [`UtmError::InvalidUrl`] if the URL cannot be split into components.
    pub fn tag_url(&self, url: &str) -> Result<String, UtmError> {
        add_utm_to_url(url, &self.params)
    }

    /// Annotates a parsed URL.
    pub fn tag_parsed_url(&self, url: &Url) -> String {
        add_utm_to_parsed_url(url, &self.params)
    }

    /// Annotates every non-image URL in `text`.
    pub fn tag_text(&self, text: &str) -> String {
        add_utm_to_all_urls(text, &self.params)
    }

    /// Annotates every non-image URL in `text` and reports what was done.
    pub fn tag_document(&self, text: &str) -> TaggedDocument {
        let tagged = tag_document(text, &self.params);

        tracing::info!(
            campaign = %self.params.campaign,
            urls = tagged.report.urls_found,
            tagged = tagged.report.tagged,
            "Tracking parameters applied"
        );

        tagged
    }
}

impl DocumentProcessor for UtmTagger {
    fn process(&self, text: &str) -> String {
        self.tag_text(text)
    }
}
