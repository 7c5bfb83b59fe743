//! Error types for interpreter resolution and wheel builds.
//!
//! Adapters map [`CoreError`] to their own representation (CLI exit
//! codes, log lines); the core never prints anything.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::InterpreterCandidate;
use crate::paths::PathError;

/// No candidate interpreter survived validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unable to determine a Python interpreter; tried the following candidates: {}",
    CandidateList(.candidates)
)]
pub struct ResolutionError {
    /// Every candidate considered, in evaluation order, including absent ones.
    pub candidates: Vec<InterpreterCandidate>,
}

struct CandidateList<'a>(&'a [InterpreterCandidate]);

impl fmt::Display for CandidateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, candidate) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{candidate}")?;
        }
        Ok(())
    }
}

/// The wheel build itself failed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// pip ran and exited unsuccessfully.
    #[error("pip wheel failed using {}: {}", .interpreter.display(), ExitDescription(.code))]
    ToolFailed {
        interpreter: PathBuf,
        /// `None` when the child was terminated by a signal.
        code: Option<i32>,
    },

    /// The interpreter could not be started at all.
    #[error("Failed to launch {}: {reason}", .interpreter.display())]
    Launch { interpreter: PathBuf, reason: String },

    /// The destination directory could not be prepared.
    #[error(transparent)]
    Destination(#[from] PathError),
}

struct ExitDescription<'a>(&'a Option<i32>);

impl fmt::Display for ExitDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Error returned by the core services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
