// Diagnostics for the demo binaries.
// Demo output goes to stdout through the Console; tracing goes to stderr.

use crate::config::Settings;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. A second call leaves the first in place.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(settings.color)
        .with_writer(std::io::stderr)
        .try_init();
}
