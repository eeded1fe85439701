use std::{io, path::PathBuf};

use ::config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while locating or loading the profile rule file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `CDKPW_CONFIG` nor a home directory is available.
    #[error("unable to determine config directory: {reason}")]
    HomeUnavailable { reason: String },
    /// Failed to read the configuration file from disk.
    #[error("could not read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to deserialize YAML into the rule set.
    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
}

impl ConfigError {
    /// Helper to wrap an I/O failure as a read failure.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised while delegating to the wrapped tool.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("failed while waiting for `{tool}`: {source}")]
    Wait {
        tool: String,
        #[source]
        source: io::Error,
    },
}
