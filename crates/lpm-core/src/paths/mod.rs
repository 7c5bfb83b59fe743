//! Destination directory handling for built wheels.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;

pub use ensure::ensure_directory;
pub use error::PathError;

/// Default output directory for `lpm buildpkg`, relative to the working directory.
pub const DEFAULT_WHEEL_OUTPUT_DIR: &str = "build/python";
