//! Load the profile rule file.
use std::{fs, path::PathBuf};

use ::config::{File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use crate::lib::{cdk::DEFAULT_CDK_LOCATION, errors::ConfigError, paths};

pub mod rules;
pub mod telemetry;

pub use rules::{ProfileRule, RawProfileRule, Verbosity};

/// Ordered rules plus the wrapper's auxiliary settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRuleSet {
    pub rules: Vec<ProfileRule>,
    /// Location of the wrapped tool; may contain `$VAR` references.
    pub tool_location: String,
    pub verbosity: Verbosity,
    pub source_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct RawWrapperConfig {
    #[serde(default)]
    profiles: Vec<RawProfileRule>,
    #[serde(default, rename = "cdkLocation", alias = "cdklocation")]
    cdk_location: Option<String>,
    #[serde(default)]
    verbose: Verbosity,
}

impl Default for ProfileRuleSet {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            tool_location: DEFAULT_CDK_LOCATION.to_string(),
            verbosity: Verbosity::Silent,
            source_path: PathBuf::new(),
        }
    }
}

impl ProfileRuleSet {
    /// Build an in-memory rule set with default settings.
    pub fn with_rules(rules: impl IntoIterator<Item = ProfileRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Prefer `CDKPW_CONFIG` if set; otherwise read `$HOME/.cdk/.cdkpw.yml`.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let path = paths::resolve_config_path().map_err(|err| {
            error!(
                target: "cdkpw::config",
                reason = %err,
                "Failed to locate configuration file"
            );
            err
        })?;

        telemetry::log_source(&path);
        Self::load_from_path(path)
    }

    /// Load rules from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "cdkpw::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let contents = fs::read_to_string(&path).map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "cdkpw::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let config = Self::from_yaml_str(&contents, path.clone()).map_err(|err| {
            error!(
                target: "cdkpw::config",
                path = %path.display(),
                reason = %err,
                "Failed to parse configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Parse YAML text; `path` is only used for error reporting.
    pub fn from_yaml_str(contents: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let document = ::config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Yaml))
            .build()
            .map_err(|err| ConfigError::from_parse_error(path.clone(), err))?;

        let raw: RawWrapperConfig = document
            .try_deserialize()
            .map_err(|err| ConfigError::from_parse_error(path.clone(), err))?;

        Ok(Self::from_raw(raw, path))
    }

    fn from_raw(raw: RawWrapperConfig, path: PathBuf) -> Self {
        let tool_location = raw
            .cdk_location
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty())
            .unwrap_or_else(|| DEFAULT_CDK_LOCATION.to_string());

        Self {
            rules: raw.profiles.into_iter().map(ProfileRule::from).collect(),
            tool_location,
            verbosity: raw.verbose,
            source_path: path,
        }
    }
}
