//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use lpm_core::DEFAULT_WHEEL_OUTPUT_DIR;

/// Available lpm commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build packages managed by lpm
    Buildpkg(BuildpkgArgs),
}

/// Arguments for `lpm buildpkg`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BuildpkgArgs {
    /// Build a Python wheel for PACKAGE using pip
    #[arg(long = "python-pip", value_name = "PACKAGE")]
    pub python_pip: String,

    /// Directory where the built artifacts will be stored
    #[arg(short = 'o', long = "output-dir", default_value = DEFAULT_WHEEL_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Explicit Python interpreter to run pip with
    #[arg(long = "python-executable", value_name = "PATH", env = "LPM_PYTHON")]
    pub python_executable: Option<PathBuf>,

    /// Extra argument forwarded to `pip wheel` (repeatable)
    #[arg(long = "pip-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub pip_args: Vec<String>,
}
