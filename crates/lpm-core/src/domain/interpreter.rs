use std::fmt;
use std::path::{Path, PathBuf};

/// Where an interpreter candidate was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// The executable running this process.
    SelfExecutable,
    /// A `PATH` search for the given program name.
    PathLookup(&'static str),
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfExecutable => write!(f, "current executable"),
            Self::PathLookup(name) => write!(f, "PATH lookup of `{name}`"),
        }
    }
}

/// One slot in the ordered candidate list.
///
/// `path` is `None` when the host could not report a value for this slot
/// (no current executable, or nothing on `PATH`). Absent slots are still
/// listed so a failed resolution can show everything that was considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterCandidate {
    pub source: CandidateSource,
    pub path: Option<PathBuf>,
}

impl InterpreterCandidate {
    pub const fn new(source: CandidateSource, path: Option<PathBuf>) -> Self {
        Self { source, path }
    }

    /// The candidate path, treating an empty path as absent.
    pub fn usable_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl fmt::Display for InterpreterCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.usable_path() {
            Some(path) => write!(f, "'{}'", path.display()),
            None => write!(f, "<none>"),
        }
    }
}

/// How the interpreter that will run pip was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    /// Supplied by the caller and trusted as-is.
    Explicit,
    /// The executable running this process.
    SelfExecutable,
    /// Found by searching `PATH` for the given program name.
    PathLookup(&'static str),
}

impl From<CandidateSource> for InterpreterSource {
    fn from(source: CandidateSource) -> Self {
        match source {
            CandidateSource::SelfExecutable => Self::SelfExecutable,
            CandidateSource::PathLookup(name) => Self::PathLookup(name),
        }
    }
}

impl fmt::Display for InterpreterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit override"),
            Self::SelfExecutable => write!(f, "current executable"),
            Self::PathLookup(name) => write!(f, "PATH lookup of `{name}`"),
        }
    }
}

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterpreter {
    pub path: PathBuf,
    pub source: InterpreterSource,
}

impl ResolvedInterpreter {
    pub const fn new(path: PathBuf, source: InterpreterSource) -> Self {
        Self { path, source }
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
