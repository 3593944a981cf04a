//! Tagger configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any document
//! is processed. Command-line flags take priority over the values here.
//!
//! ## Tracking Variables
//!
//! ```bash
//! export UTM_SOURCE="newsletter"
//! export UTM_MEDIUM="email"
//! export UTM_CAMPAIGN="spring-launch"
//! ```
//!
//! All three are optional in the environment, but each one must be provided
//! either here or on the command line before a document can be tagged.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Result, bail};
use std::env;

use crate::domain::TrackingParams;

/// Tagger configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            utm_source: env::var("UTM_SOURCE").ok(),
            utm_medium: env::var("UTM_MEDIUM").ok(),
            utm_campaign: env::var("UTM_CAMPAIGN").ok(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - a tracking variable is set but blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        for (name, value) in [
            ("UTM_SOURCE", &self.utm_source),
            ("UTM_MEDIUM", &self.utm_medium),
            ("UTM_CAMPAIGN", &self.utm_campaign),
        ] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                bail!("{name} must not be blank when set");
            }
        }

        Ok(())
    }

    /// Resolves the tracking triple, preferring explicit overrides.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first value that is neither overridden nor configured.
    pub fn tracking(
        &self,
        source: Option<String>,
        medium: Option<String>,
        campaign: Option<String>,
    ) -> Result<TrackingParams> {
        let source = resolve("source", "UTM_SOURCE", source, &self.utm_source)?;
        let medium = resolve("medium", "UTM_MEDIUM", medium, &self.utm_medium)?;
        let campaign = resolve("campaign", "UTM_CAMPAIGN", campaign, &self.utm_campaign)?;

        Ok(TrackingParams::new(source, medium, campaign))
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  UTM source: {}", display_optional(&self.utm_source));
        tracing::debug!("  UTM medium: {}", display_optional(&self.utm_medium));
        tracing::debug!("  UTM campaign: {}", display_optional(&self.utm_campaign));
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

fn resolve(
    flag: &str,
    variable: &str,
    explicit: Option<String>,
    configured: &Option<String>,
) -> Result<String> {
    match explicit.or_else(|| configured.clone()) {
        Some(value) => Ok(value),
        None => bail!("Tracking {flag} is missing: pass --{flag} or set {variable}"),
    }
}

fn display_optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(not set)")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
