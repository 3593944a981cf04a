//! Application layer: the tagging operations and the service built on them.
//!
//! - [`tagging`] - Free functions for single URLs and whole documents
//! - [`services::tagging_service::UtmTagger`] - Reusable tagger bound to one tracking triple

pub mod services;
pub mod tagging;
