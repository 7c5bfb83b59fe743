//! Host environment implementation for lpm-runtime.
//!
//! This module provides `SystemHost`, which implements `InterpreterHostPort`
//! from lpm-core against the real process: `std::env::current_exe`, a `which`
//! search of `PATH`, and the real filesystem.

use std::env;
use std::path::{Path, PathBuf};

use lpm_core::ports::InterpreterHostPort;
use tracing::debug;

/// Environment marker that flags the process as a frozen bundle.
pub const FROZEN_ENV_VAR: &str = "LPM_FROZEN";

/// Default implementation of `InterpreterHostPort`.
///
/// Constructed at the CLI composition root and shared behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// use lpm_core::ports::InterpreterHostPort;
/// use lpm_runtime::SystemHost;
///
/// let host = SystemHost::detect();
/// let python3 = host.find_on_path("python3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SystemHost {
    frozen: bool,
}

impl SystemHost {
    /// Create a host with an explicit frozen flag.
    pub const fn new(frozen: bool) -> Self {
        Self { frozen }
    }

    /// Create a host whose frozen flag comes from [`detect_frozen`].
    pub fn detect() -> Self {
        Self::new(detect_frozen())
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::detect()
    }
}

impl InterpreterHostPort for SystemHost {
    fn current_executable(&self) -> Option<PathBuf> {
        match env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Cannot determine current executable: {e}");
                None
            }
        }
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn find_on_path(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Whether this process should be treated as a frozen bundle.
///
/// True when built with the `frozen` feature, or when [`FROZEN_ENV_VAR`]
/// holds a truthy value.
pub fn detect_frozen() -> bool {
    if cfg!(feature = "frozen") {
        return true;
    }

    env::var(FROZEN_ENV_VAR).is_ok_and(|value| is_truthy_marker(&value))
}

/// Interpret an environment marker value: `1`, `true`, `yes`, `on`
/// (case-insensitive, surrounding whitespace ignored).
pub fn is_truthy_marker(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
