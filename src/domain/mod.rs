//! Value types shared by the tagging pipeline.
//!
//! - [`tracking`] - The `(source, medium, campaign)` triple and UTM key names
//! - [`url_parts`] - Lossless component split of a raw URL
//! - [`report`] - Per-document counters
//! - [`processor`] - Trait for document post-processing steps

pub mod processor;
pub mod report;
pub mod tracking;
pub mod url_parts;

pub use processor::{DocumentProcessor, run_pipeline};
pub use report::{TaggedDocument, TaggingReport};
pub use tracking::{TrackingParams, UTM_CAMPAIGN, UTM_MEDIUM, UTM_SOURCE};
pub use url_parts::UrlParts;
