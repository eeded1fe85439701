//! Path helpers shared by the config loader and the executor.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::lib::errors::ConfigError;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "CDKPW_CONFIG";
/// Environment variable for the user home directory.
const HOME_ENV: &str = "HOME";
/// Directory under home holding CDK-related settings.
pub const CONFIG_DIR: &str = ".cdk";
/// File name of the rule file inside [`CONFIG_DIR`].
pub const DEFAULT_CONFIG_FILE: &str = ".cdkpw.yml";

/// Resolve the rule file path.
///
/// 1. `$CDKPW_CONFIG` when set and non-empty (used verbatim).
/// 2. `$HOME/.cdk/.cdkpw.yml` otherwise.
pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path_from(env::var_os(CONFIG_ENV), env::var_os(HOME_ENV))
}

pub(crate) fn resolve_config_path_from(
    custom: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(custom) = custom.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(custom));
    }

    match home.filter(|value| !value.is_empty()) {
        Some(home) => Ok(default_config_path(Path::new(&home))),
        None => Err(ConfigError::HomeUnavailable {
            reason: format!("${HOME_ENV} is not defined"),
        }),
    }
}

/// Location of the rule file under a given home directory.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(DEFAULT_CONFIG_FILE)
}

/// Expand `$VAR` and `${VAR}` references using the process environment.
pub fn expand_env(raw: &str) -> String {
    expand_with(raw, |name| env::var(name).ok())
}

/// Expand `$VAR` and `${VAR}` with a custom lookup; unknown names become empty.
pub fn expand_with(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&lookup(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                None => {
                    // unterminated: keep literally
                    out.push_str(&rest[pos..]);
                    rest = "";
                }
            }
            continue;
        }

        let name_len = after
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
            .map(|(idx, _)| idx)
            .unwrap_or(after.len());
        if name_len == 0 {
            out.push('$');
        } else {
            out.push_str(&lookup(&after[..name_len]).unwrap_or_default());
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}
