//! Directory creation for build outputs.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// Ensure `path` exists as a directory, creating missing parents.
///
/// An existing directory is left untouched. An existing file at `path`
/// is an error rather than something to replace.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    debug!("Creating output directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
