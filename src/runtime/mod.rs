//! Wrapper startup and delegation to the wrapped tool.
mod executor;
mod startup;

pub use executor::{Executor, ProcessExecutor, ToolExit};
pub use startup::{run, run_with_rules, RuntimeExit};
