//! Delegation to the wrapped tool.
use std::{ffi::OsString, fmt, process::ExitStatus};

use tracing::{debug, error};

use crate::lib::{cdk::build_cdk_command, errors::ExecError};

/// How the wrapped tool finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolExit {
    Code(i32),
    /// Terminated without an exit code (e.g. killed by a signal).
    Terminated { signal: Option<i32> },
}

impl ToolExit {
    pub fn success(&self) -> bool {
        matches!(self, ToolExit::Code(0))
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ToolExit::Code(code) => Some(*code),
            ToolExit::Terminated { .. } => None,
        }
    }
}

impl From<ExitStatus> for ToolExit {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ToolExit::Code(code),
            None => ToolExit::Terminated {
                signal: exit_signal(&status),
            },
        }
    }
}

impl fmt::Display for ToolExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolExit::Code(code) => write!(f, "exit status: {code}"),
            ToolExit::Terminated {
                signal: Some(signal),
            } => write!(f, "terminated by signal {signal}"),
            ToolExit::Terminated { signal: None } => f.write_str("terminated"),
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Runs an argument list against a tool location.
#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(&self, tool: &str, args: &[OsString]) -> Result<ToolExit, ExecError>;
}

/// Spawns the real tool with inherited stdin/stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    async fn run(&self, tool: &str, args: &[OsString]) -> Result<ToolExit, ExecError> {
        let mut command = build_cdk_command(tool, args);
        let mut child = command.spawn().map_err(|source| {
            error!(
                target: "cdkpw::runtime",
                tool,
                reason = %source,
                "Failed to spawn wrapped tool"
            );
            ExecError::Spawn {
                tool: tool.to_string(),
                source,
            }
        })?;

        debug!(
            target: "cdkpw::runtime",
            tool,
            pid = child.id(),
            "Spawned wrapped tool"
        );

        let status = child.wait().await.map_err(|source| ExecError::Wait {
            tool: tool.to_string(),
            source,
        })?;
        let exit = ToolExit::from(status);

        debug!(
            target: "cdkpw::runtime",
            tool,
            status = %exit,
            "Wrapped tool finished"
        );
        Ok(exit)
    }
}
