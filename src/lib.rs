//! # UTM Tagger
//!
//! Post-processing for rendered blog posts: finds the links in a document and
//! adds campaign-tracking query parameters (`utm_source`, `utm_medium`,
//! `utm_campaign`) to each of them, leaving links to images untouched.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Tracking triple, URL components, reports
//! - **Utilities** ([`utils`]) - URL locator, image classifier, query merge
//! - **Application Layer** ([`application`]) - Document transform and the [`UtmTagger`] service
//!
//! Every operation is a pure, synchronous string transformation. Nothing is
//! fetched, persisted or shared between calls, so callers may process
//! documents in parallel freely.
//!
//! ## Quick Start
//!
//! ```
//! use utm_tagger::prelude::*;
//!
//! let params = TrackingParams::new("newsletter", "email", "launch");
//! let text = "Read [the post](https://example.com/post) ![cover](https://example.com/cover.png)";
//!
//! assert_eq!(
//!     add_utm_to_all_urls(text, &params),
//!     "Read [the post](https://example.com/post?utm_source=newsletter&utm_medium=email&utm_campaign=launch) \
//!      ![cover](https://example.com/cover.png)"
//! );
//! ```
//!
//! ## Configuration
//!
//! The `utm-tagger` binary reads its defaults from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use application::services::UtmTagger;
pub use error::UtmError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UtmTagger;
    pub use crate::application::tagging::{
        add_utm_to_all_urls, add_utm_to_parsed_url, add_utm_to_url, document_text, tag_document,
    };
    pub use crate::domain::{
        DocumentProcessor, TaggedDocument, TaggingReport, TrackingParams, UrlParts,
    };
    pub use crate::error::UtmError;
    pub use crate::utils::image::is_image;
    pub use crate::utils::url_finder::{find_url_matches, find_urls};
}
