mod cmd;
mod repo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fmt/clippy/test/build).
    Preflight,
    /// Load a cdkpw rule file and print the rules it defines.
    CheckConfig {
        /// Rule file to check (defaults to CDKPW_CONFIG or ~/.cdk/.cdkpw.yml)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
        /// Show which profile a stack name would receive
        #[arg(long, value_name = "NAME")]
        stack: Option<String>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::CheckConfig { path, stack } => {
            cmd::check_config::run(path, stack)?;
        }
    }
    Ok(())
}
