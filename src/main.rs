//! Entry point for cdkpw.
use std::{env, process::ExitCode};

use cdkpw::{
    lib::telemetry,
    runtime::{self, ProcessExecutor, RuntimeExit},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let tokens = env::args_os().skip(1).collect();

    runtime::run(tokens, &ProcessExecutor, &mut std::io::stdout()).await
}
