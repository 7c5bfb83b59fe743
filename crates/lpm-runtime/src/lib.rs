#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod process;
pub mod system;

// Re-export the port implementations wired by adapters
pub use process::ProcessCommandRunner;
pub use system::{FROZEN_ENV_VAR, SystemHost, detect_frozen, is_truthy_marker};
