//! In-memory host for service tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::ports::InterpreterHostPort;

/// Host whose executable, `PATH` contents and filesystem are all fixed up front.
#[derive(Debug, Default)]
pub struct FakeHost {
    current: Option<PathBuf>,
    frozen: bool,
    on_path: HashMap<String, PathBuf>,
    existing: HashSet<PathBuf>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `path` as the running executable, optionally present on disk.
    pub fn with_current(mut self, path: &str, exists: bool) -> Self {
        let path = PathBuf::from(path);
        if exists {
            self.existing.insert(path.clone());
        }
        self.current = Some(path);
        self
    }

    pub const fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Make `program` resolvable on `PATH` at `path`, optionally present on disk.
    pub fn with_program(mut self, program: &str, path: &str, exists: bool) -> Self {
        let path = PathBuf::from(path);
        if exists {
            self.existing.insert(path.clone());
        }
        self.on_path.insert(program.to_string(), path);
        self
    }
}

impl InterpreterHostPort for FakeHost {
    fn current_executable(&self) -> Option<PathBuf> {
        self.current.clone()
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn find_on_path(&self, program: &str) -> Option<PathBuf> {
        self.on_path.get(program).cloned()
    }

    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }
}
