//! UTM annotation of single URLs and whole documents.
//!
//! # Document Transform
//!
//! 1. Locate every URL occurrence with [`find_url_matches`]
//! 2. Leave image resources and URLs that cannot be split untouched
//! 3. Annotate each distinct remaining URL once
//! 4. Rebuild the text from the located spans
//!
//! Replacement is positional: only the located occurrences are rewritten, so
//! a URL that happens to be a substring of another URL (or of an annotated
//! result) can never be rewritten by accident.

use std::collections::HashMap;

use url::Url;

use crate::domain::{TaggedDocument, TaggingReport, TrackingParams, UrlParts};
use crate::error::UtmError;
use crate::utils::image::is_image;
use crate::utils::query::merge_tracking_query;
use crate::utils::url_finder::find_url_matches;

/// What to do with one distinct located URL.
#[derive(Debug)]
enum Rewrite {
    Tagged(String),
    Image,
    Invalid,
}

/// Adds the tracking triple to a single raw URL.
///
/// Scheme, authority, path and fragment are copied verbatim; only the query
/// is rebuilt. Tracking keys override like-named existing parameters.
///
/// # Errors
///
/// Returns [`UtmError::InvalidUrl`] if the URL cannot be split into components.
///
/// # Examples
///
/// ```
/// use utm_tagger::application::tagging::add_utm_to_url;
/// use utm_tagger::domain::TrackingParams;
///
/// let params = TrackingParams::new("newsletter", "email", "launch");
/// assert_eq!(
///     add_utm_to_url("https://example.com/post?ref=1", &params).unwrap(),
///     "https://example.com/post?ref=1&utm_source=newsletter&utm_medium=email&utm_campaign=launch"
/// );
/// ```
pub fn add_utm_to_url(url: &str, params: &TrackingParams) -> Result<String, UtmError> {
    let parts = UrlParts::parse(url)?;
    Ok(annotate(&parts, params))
}

/// Adds the tracking triple to an already parsed URL.
///
/// The result follows the `url` crate's serialization, so it is normalized
/// (lower-case host, `/` path for bare hosts).
pub fn add_utm_to_parsed_url(url: &Url, params: &TrackingParams) -> String {
    let query = merge_tracking_query(url.query(), params);
    let mut url = url.clone();
    url.set_query(Some(&query));
    url.into()
}

/// Adds the tracking triple to every non-image URL in `text`.
///
/// Text without URLs is returned unchanged.
pub fn add_utm_to_all_urls(text: &str, params: &TrackingParams) -> String {
    tag_document(text, params).text
}

/// Same transform as [`add_utm_to_all_urls`], also returning what was done.
pub fn tag_document(text: &str, params: &TrackingParams) -> TaggedDocument {
    let mut output = String::with_capacity(text.len());
    let mut rewrites: HashMap<&str, Rewrite> = HashMap::new();
    let mut report = TaggingReport::default();
    let mut cursor = 0;

    for found in find_url_matches(text) {
        let original = found.as_str();
        let rewrite = rewrites
            .entry(original)
            .or_insert_with(|| classify(original, params));

        output.push_str(&text[cursor..found.start()]);
        match rewrite {
            Rewrite::Tagged(annotated) => {
                output.push_str(annotated);
                report.tagged += 1;
            }
            Rewrite::Image => {
                output.push_str(original);
                report.skipped_images += 1;
            }
            Rewrite::Invalid => {
                output.push_str(original);
                report.skipped_invalid += 1;
            }
        }
        report.urls_found += 1;
        cursor = found.end();
    }
    output.push_str(&text[cursor..]);

    report.distinct_urls = rewrites.len();

    tracing::debug!(
        urls_found = report.urls_found,
        tagged = report.tagged,
        skipped_images = report.skipped_images,
        skipped_invalid = report.skipped_invalid,
        "Document tagged"
    );

    TaggedDocument {
        text: output,
        report,
    }
}

/// Converts raw input bytes into document text.
///
/// # Errors
///
/// Returns [`UtmError::InvalidArgument`] if the bytes are not UTF-8 text.
pub fn document_text(bytes: Vec<u8>) -> Result<String, UtmError> {
    String::from_utf8(bytes).map_err(|e| {
        UtmError::invalid_argument(format!("document is not valid UTF-8 text: {e}"))
    })
}

fn annotate(parts: &UrlParts<'_>, params: &TrackingParams) -> String {
    parts.with_query(&merge_tracking_query(parts.query, params))
}

fn classify(url: &str, params: &TrackingParams) -> Rewrite {
    match UrlParts::parse(url) {
        Ok(parts) if is_image(parts.path) => {
            tracing::debug!(url, "Skipping image resource");
            Rewrite::Image
        }
        Ok(parts) => Rewrite::Tagged(annotate(&parts, params)),
        Err(e) => {
            tracing::debug!(url, error = %e, "Leaving unparseable URL unchanged");
            Rewrite::Invalid
        }
    }
}
