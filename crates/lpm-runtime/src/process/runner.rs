//! `CommandRunnerPort` backed by `std::process::Command`.
//!
//! The child inherits stdin/stdout/stderr, so pip's progress output goes
//! straight to the user's terminal. The call blocks until the child exits.

use std::process::Command;

use lpm_core::domain::{ExitOutcome, WheelInvocation};
use lpm_core::ports::{CommandRunnerPort, ProcessError};
use tracing::{debug, warn};

/// Runs invocations as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunnerPort for ProcessCommandRunner {
    fn run(&self, invocation: &WheelInvocation) -> Result<ExitOutcome, ProcessError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        // A custom environment replaces the inherited one for the child only.
        if let Some(env) = &invocation.env {
            cmd.env_clear().envs(env);
        }

        debug!("Spawning {invocation}");
        let mut child = cmd
            .spawn()
            .map_err(|e| ProcessError::StartFailed(e.to_string()))?;

        let status = child
            .wait()
            .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;

        if status.success() {
            debug!(pid = child.id(), "Process exited successfully");
        } else {
            warn!(pid = child.id(), "Process exited with {status}");
        }

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}
