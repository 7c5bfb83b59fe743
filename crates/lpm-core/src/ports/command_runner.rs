//! Port for running the external build tool.
//!
//! The runner blocks until the child exits. Standard streams are inherited
//! so pip output reaches the user unchanged.

use crate::domain::{ExitOutcome, WheelInvocation};

use super::ProcessError;

/// Executes a [`WheelInvocation`] synchronously.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunnerPort: Send + Sync {
    /// Run the command to completion.
    ///
    /// Returns `Err` only when the process could not be started or waited
    /// on. A non-zero exit is reported through [`ExitOutcome`].
    fn run(&self, invocation: &WheelInvocation) -> Result<ExitOutcome, ProcessError>;
}
