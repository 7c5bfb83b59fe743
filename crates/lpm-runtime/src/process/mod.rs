//! Synchronous process execution for the wheel build.

mod runner;

pub use runner::ProcessCommandRunner;
