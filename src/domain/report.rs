//! Counters collected while tagging one document.

use serde::Serialize;

/// What happened to the URLs of a single document.
///
/// Counts are per occurrence, except `distinct_urls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaggingReport {
    pub urls_found: usize,
    pub distinct_urls: usize,
    pub tagged: usize,
    pub skipped_images: usize,
    pub skipped_invalid: usize,
}

impl TaggingReport {
    /// Returns true if at least one URL was rewritten.
    pub fn is_modified(&self) -> bool {
        self.tagged > 0
    }
}

/// Transformed document text together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedDocument {
    pub text: String,
    pub report: TaggingReport,
}
