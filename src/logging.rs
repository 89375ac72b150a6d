//! Log setup for the pxavatar binary.
//!
//! Logs go to stderr; stdout is reserved for ids and machine-readable output.

use tracing_subscriber::EnvFilter;

/// Accepted values for `--log-level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Build the filter: `RUST_LOG` when set, otherwise `pxavatar=<level>`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("pxavatar={level}")))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    tracing::debug!("logging initialized");
}
