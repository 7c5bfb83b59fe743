//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `PATH` or process handling in core; adapters live in `lpm-runtime`
//! - Intent-based methods (not implementation-leaking)

pub mod command_runner;
pub mod interpreter_host;

use thiserror::Error;

pub use command_runner::CommandRunnerPort;
pub use interpreter_host::InterpreterHostPort;

#[cfg(test)]
pub use command_runner::MockCommandRunnerPort;

/// Domain-specific errors for process runner operations.
///
/// This error type abstracts away process management implementation details
/// and provides a clean interface for services to handle process failures.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to start the process.
    #[error("Failed to start: {0}")]
    StartFailed(String),

    /// Waiting on the running process failed.
    #[error("Failed to wait for process: {0}")]
    WaitFailed(String),
}
