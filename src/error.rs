//! Library error type.
//!
//! The document transform itself is total; these errors only surface from the
//! single-URL entry point and from the input guard that turns raw bytes into
//! document text.

/// Errors returned by the tagging API.
#[derive(Debug, thiserror::Error)]
pub enum UtmError {
    /// The caller passed something that is not usable as document text.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The URL could not be split into its components.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl UtmError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
