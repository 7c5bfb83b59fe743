//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Host environment (via lpm-runtime)
//! - Process runner (via lpm-runtime)
//! - Wheel builder service (via lpm-core)
//!
//! Command handlers receive the fully-composed context and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use lpm_core::WheelBuilder;
use lpm_core::ports::{CommandRunnerPort, InterpreterHostPort};
use lpm_runtime::{ProcessCommandRunner, SystemHost, detect_frozen};
use tracing::debug;

/// Load `.env` from the working directory, if present.
///
/// Call before argument parsing so env-backed flags (`LPM_PYTHON`) and
/// `LPM_LOG` can come from the file. Returns the file that was loaded, or
/// `None` when there is no `.env`. A malformed file is returned as an error
/// for the caller to log once logging is up.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenvy::Error> {
    loaded_env_file(dotenvy::dotenv())
}

fn loaded_env_file(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Treat the running `lpm` executable as a bundle launcher.
    pub frozen: bool,
}

impl CliConfig {
    /// Create config from the build features and environment.
    pub fn with_defaults() -> Self {
        Self {
            frozen: detect_frozen(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    builder: WheelBuilder,
}

impl CliContext {
    /// Compose a context from explicit port implementations.
    pub fn new(host: Arc<dyn InterpreterHostPort>, runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self {
            builder: WheelBuilder::new(host, runner),
        }
    }

    /// Access the wheel builder.
    pub const fn builder(&self) -> &WheelBuilder {
        &self.builder
    }
}

/// Bootstrap the CLI application with the real host and process runner.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(frozen = config.frozen, "Bootstrapping CLI context");
    CliContext::new(
        Arc::new(SystemHost::new(config.frozen)),
        Arc::new(ProcessCommandRunner::new()),
    )
}
