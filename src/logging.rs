use std::env;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so that stdout
/// carries only the scan listing and the heatmap.
pub fn init_logging() {
    let debug_enabled = env::var("GITSTATS_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
