//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout carries only the build result line.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `lpm_core=debug`.
pub const LOG_ENV_VAR: &str = "LPM_LOG";

/// Filter used when `LPM_LOG` is unset or invalid.
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global tracing subscriber.
///
/// A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
