//! Shared helpers for building the wrapped `cdk` command.

use std::{ffi::OsString, process::Stdio};

use tokio::process::Command;

use crate::lib::paths::expand_env;

/// Default tool location, resolved through `PATH`.
pub const DEFAULT_CDK_LOCATION: &str = "cdk";

/// Build the delegated command with inherited standard streams.
pub fn build_cdk_command(tool: &str, args: &[OsString]) -> Command {
    let mut command = Command::new(expand_env(tool));
    command.args(args);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}
