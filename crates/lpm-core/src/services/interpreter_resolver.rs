//! Interpreter resolution.
//!
//! Picks the Python interpreter that will run `pip`. Candidates, in order:
//!
//! 1. The executable running this process
//! 2. `python3` on `PATH`
//! 3. `python` on `PATH`
//!
//! When the process is a frozen bundle, its own executable is a launcher
//! and is skipped unless its file name starts with `python`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CandidateSource, InterpreterCandidate, InterpreterSource, ResolvedInterpreter,
};
use crate::errors::ResolutionError;
use crate::ports::InterpreterHostPort;

/// Program names searched on `PATH`, in priority order.
pub const PYTHON_PROGRAMS: &[&str] = &["python3", "python"];

const INTERPRETER_NAME_PREFIX: &str = "python";

/// Resolves a usable Python interpreter through an injected host.
#[derive(Clone)]
pub struct InterpreterResolver {
    host: Arc<dyn InterpreterHostPort>,
}

impl InterpreterResolver {
    pub fn new(host: Arc<dyn InterpreterHostPort>) -> Self {
        Self { host }
    }

    /// Resolve the interpreter to use.
    ///
    /// A non-empty `explicit` path is returned verbatim, without checking
    /// that it exists. Otherwise the first candidate that is present, exists
    /// on disk, and is not an excluded launcher wins.
    pub fn resolve(
        &self,
        explicit: Option<&Path>,
    ) -> Result<ResolvedInterpreter, ResolutionError> {
        if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
            debug!("Using explicit interpreter {}", path.display());
            return Ok(ResolvedInterpreter::new(
                path.to_path_buf(),
                InterpreterSource::Explicit,
            ));
        }

        let self_executable = self.host.current_executable();
        let frozen = self.host.is_frozen();
        let candidates = self.candidates(self_executable.clone());

        for candidate in &candidates {
            let Some(path) = candidate.usable_path() else {
                debug!(source = %candidate.source, "No candidate");
                continue;
            };

            if !self.host.exists(path) {
                debug!(source = %candidate.source, "Skipping {}: not found", path.display());
                continue;
            }

            if frozen
                && self_executable.as_deref() == Some(path)
                && !has_interpreter_file_name(path)
            {
                debug!(
                    source = %candidate.source,
                    "Skipping {}: bundle launcher, not an interpreter",
                    path.display()
                );
                continue;
            }

            info!(source = %candidate.source, "Resolved interpreter {}", path.display());
            return Ok(ResolvedInterpreter::new(
                path.to_path_buf(),
                candidate.source.into(),
            ));
        }

        Err(ResolutionError { candidates })
    }

    fn candidates(&self, self_executable: Option<PathBuf>) -> Vec<InterpreterCandidate> {
        let mut candidates = Vec::with_capacity(1 + PYTHON_PROGRAMS.len());
        candidates.push(InterpreterCandidate::new(
            CandidateSource::SelfExecutable,
            self_executable,
        ));
        candidates.extend(PYTHON_PROGRAMS.iter().map(|&program| {
            InterpreterCandidate::new(
                CandidateSource::PathLookup(program),
                self.host.find_on_path(program),
            )
        }));
        candidates
    }
}

fn has_interpreter_file_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with(INTERPRETER_NAME_PREFIX))
}
