//! Text and URL helpers used by the tagging pipeline.
//!
//! - [`url_finder`] - Locating HTTP(S) URLs in free text
//! - [`image`] - Image resource detection by path extension
//! - [`query`] - Query-string parsing and UTM merge

pub mod image;
pub mod query;
pub mod url_finder;
