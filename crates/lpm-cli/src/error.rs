//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use lpm_core::{BuildError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No usable Python interpreter was found.
    #[error("{0}")]
    Resolution(String),

    /// pip failed or could not be started.
    #[error("{0}")]
    Build(String),

    /// The output directory could not be created.
    #[error("{0}")]
    Destination(String),

    /// Argument validation error beyond what clap checks.
    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Build(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Resolution(_) => 69,  // EX_UNAVAILABLE
            Self::Destination(_) => 73, // EX_CANTCREAT
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Resolution(e) => Self::Resolution(e.to_string()),
            CoreError::Build(BuildError::Destination(e)) => Self::Destination(e.to_string()),
            CoreError::Build(e) => Self::Build(e.to_string()),
        }
    }
}

/// Exit code for an error that reached `main`.
///
/// Errors that are not a [`CliError`] map to the general failure code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
