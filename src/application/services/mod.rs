//! Services wrapping the tagging operations.

pub mod tagging_service;

pub use tagging_service::UtmTagger;
