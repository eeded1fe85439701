use tracing::{debug, info};

use super::ProfileRuleSet;
use crate::lib::paths::{CONFIG_ENV, DEFAULT_CONFIG_FILE};

pub fn log_source(path: &std::path::Path) {
    if std::env::var_os(CONFIG_ENV).is_some_and(|value| !value.is_empty()) {
        info!(
            target: "cdkpw::config",
            path = %path.display(),
            "Loading configuration using CDKPW_CONFIG environment variable"
        );
    } else {
        debug!(
            target: "cdkpw::config",
            path = %path.display(),
            env = CONFIG_ENV,
            default = DEFAULT_CONFIG_FILE,
            "CDKPW_CONFIG not set; using the file under the home directory"
        );
    }
}

pub fn log_loaded(config: &ProfileRuleSet) {
    info!(
        target: "cdkpw::config",
        path = %config.source_path.display(),
        rules = config.rules.len(),
        tool_location = %config.tool_location,
        verbosity = config.verbosity.as_str(),
        "Configuration file loaded successfully"
    );
}
