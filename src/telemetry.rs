//! Logging setup for the command-line front end.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// # Logging Behavior
///
/// - Filter comes from `RUST_LOG`, falling back to `info` if it does not parse
/// - `LOG_FORMAT=json` emits one JSON object per event, anything else is plain text
/// - Output goes to stderr, stdout is reserved for the processed document
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
