//! Host environment port used by interpreter resolution.
//!
//! Core owns the trait; `lpm-runtime` owns the real implementation
//! (`SystemHost`). Tests substitute an in-memory host so resolution never
//! touches the real `PATH` or filesystem.

use std::path::{Path, PathBuf};

/// Read-only view of the process environment needed to pick an interpreter.
pub trait InterpreterHostPort: Send + Sync {
    /// Path of the executable running this process, if it can be determined.
    fn current_executable(&self) -> Option<PathBuf>;

    /// Whether this process runs from a self-contained bundle whose
    /// executable is a launcher rather than a real interpreter.
    fn is_frozen(&self) -> bool;

    /// Search `PATH` for an executable called `program`.
    fn find_on_path(&self, program: &str) -> Option<PathBuf>;

    /// Whether `path` exists on disk.
    fn exists(&self, path: &Path) -> bool;
}
