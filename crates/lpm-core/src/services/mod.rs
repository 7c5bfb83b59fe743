//! Core services composed from ports.
//!
//! Services hold `Arc<dyn Port>` handles injected by the adapter's
//! composition root and contain all of the decision logic.

mod interpreter_resolver;
mod wheel_builder;

#[cfg(test)]
mod test_support;

pub use interpreter_resolver::{InterpreterResolver, PYTHON_PROGRAMS};
pub use wheel_builder::WheelBuilder;
