#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod errors;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CandidateSource, ExitOutcome, InterpreterCandidate, InterpreterSource, ResolvedInterpreter,
    WheelBuildRequest, WheelInvocation,
};
pub use errors::{BuildError, CoreError, ResolutionError};
pub use paths::{DEFAULT_WHEEL_OUTPUT_DIR, PathError, ensure_directory};
pub use ports::{CommandRunnerPort, InterpreterHostPort, ProcessError};
pub use services::{InterpreterResolver, WheelBuilder};
