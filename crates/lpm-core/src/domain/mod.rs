//! Domain types for interpreter resolution and wheel builds.
//!
//! Everything here is a plain value: no process spawning, no `PATH`
//! access, no filesystem calls.

mod interpreter;
mod wheel;

pub use interpreter::{
    CandidateSource, InterpreterCandidate, InterpreterSource, ResolvedInterpreter,
};
pub use wheel::{ExitOutcome, WheelBuildRequest, WheelInvocation};
