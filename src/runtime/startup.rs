use std::{ffi::OsString, io::Write, process::ExitCode};

use anyhow::{Context, Error};

use crate::{
    cli::{apply_profile_rules, Invocation},
    config::{ProfileRuleSet, Verbosity},
    lib::telemetry::{emit_invocation, InvocationTelemetry},
    runtime::executor::{Executor, ToolExit},
};

const FAILURE_CODE: u8 = 1;

/// Bundles a runtime error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: FAILURE_CODE,
        }
    }

    /// The wrapped tool ran but did not succeed; mirror its exit code.
    pub fn tool_failed(exit: ToolExit) -> Self {
        let exit_code = exit
            .code()
            .and_then(|code| u8::try_from(code).ok())
            .filter(|code| *code != 0)
            .unwrap_or(FAILURE_CODE);
        Self {
            message: format!("Error running cdk command: {exit}"),
            exit_code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Classify `tokens`, load the rule file, and delegate to the wrapped tool.
pub async fn run<E: Executor>(
    tokens: Vec<OsString>,
    executor: &E,
    out: &mut impl Write,
) -> Result<(), RuntimeExit> {
    let invocation = Invocation::from_os_args(tokens);
    let rules = ProfileRuleSet::load_from_env_or_default()
        .context("Error loading config")
        .map_err(RuntimeExit::from_error)?;

    run_with_rules(invocation, &rules, executor, out).await
}

/// Apply profile rules to an already classified invocation and run it.
pub async fn run_with_rules<E: Executor>(
    mut invocation: Invocation,
    rules: &ProfileRuleSet,
    executor: &E,
    out: &mut impl Write,
) -> Result<(), RuntimeExit> {
    let injected = apply_profile_rules(&mut invocation.command, rules, out);
    let command = &invocation.command;

    emit_invocation(&InvocationTelemetry {
        action: &command.action,
        target_name: &command.target_name,
        profile: &command.profile,
        injected: injected.is_some(),
        tool: &rules.tool_location,
        args: &command.raw_tokens,
    });

    if rules.verbosity >= Verbosity::Debug {
        let _ = writeln!(
            out,
            "cdkpw: Running {} {}",
            rules.tool_location,
            command.raw_tokens.join(" ")
        );
    }
    let _ = out.flush();

    let exit = executor
        .run(&rules.tool_location, &invocation.forwarded_args())
        .await
        .map_err(RuntimeExit::from_error)?;

    if exit.success() {
        Ok(())
    } else {
        Err(RuntimeExit::tool_failed(exit))
    }
}
