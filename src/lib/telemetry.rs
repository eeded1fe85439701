//! Telemetry initialization and invocation logging helpers.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CDKPW_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
///
/// The default filter is `warn` so the wrapped tool's own output is not
/// interleaved with wrapper logs; set `CDKPW_LOG=debug` to trace decisions.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing the rewritten invocation just before it is delegated.
#[derive(Debug)]
pub struct InvocationTelemetry<'a> {
    pub action: &'a str,
    pub target_name: &'a str,
    pub profile: &'a str,
    pub injected: bool,
    pub tool: &'a str,
    pub args: &'a [String],
}

/// Emit the final invocation to `tracing`.
pub fn emit_invocation(telemetry: &InvocationTelemetry<'_>) {
    debug!(
        target: "cdkpw::runtime",
        action = telemetry.action,
        target_name = telemetry.target_name,
        profile = telemetry.profile,
        injected = telemetry.injected,
        tool = telemetry.tool,
        args = ?telemetry.args,
        "Delegating to wrapped tool"
    );
}
