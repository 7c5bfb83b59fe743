//! Wheel builder service.
//!
//! Resolves an interpreter, prepares the destination directory and runs
//! `pip wheel` once. No retries; pip's exit status decides the outcome.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{WheelBuildRequest, WheelInvocation};
use crate::errors::{BuildError, CoreError};
use crate::paths::ensure_directory;
use crate::ports::{CommandRunnerPort, InterpreterHostPort};

use super::InterpreterResolver;

/// Builds wheels by shelling out to `<interpreter> -m pip wheel`.
#[derive(Clone)]
pub struct WheelBuilder {
    resolver: InterpreterResolver,
    runner: Arc<dyn CommandRunnerPort>,
}

impl WheelBuilder {
    pub fn new(host: Arc<dyn InterpreterHostPort>, runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self {
            resolver: InterpreterResolver::new(host),
            runner,
        }
    }

    /// Access the interpreter resolver.
    pub const fn resolver(&self) -> &InterpreterResolver {
        &self.resolver
    }

    /// Build a wheel for `request.package` into `request.destination`.
    ///
    /// Returns the interpreter that ran pip.
    pub fn build_wheel(&self, request: &WheelBuildRequest) -> Result<PathBuf, CoreError> {
        let interpreter = self
            .resolver
            .resolve(request.python_executable.as_deref())?;

        ensure_directory(request.output_dir()).map_err(BuildError::from)?;

        let invocation = WheelInvocation::pip_wheel(&interpreter.path, request);
        info!(package = %request.package, "Running {invocation}");

        let outcome = self
            .runner
            .run(&invocation)
            .map_err(|e| BuildError::Launch {
                interpreter: interpreter.path.clone(),
                reason: e.to_string(),
            })?;

        if !outcome.success() {
            return Err(BuildError::ToolFailed {
                interpreter: interpreter.path,
                code: outcome.code,
            }
            .into());
        }

        info!(package = %request.package, "Built wheel into {}", request.output_dir().display());
        Ok(interpreter.into_path())
    }
}
