//! Invocation classification and profile resolution.
use std::{ffi::OsString, io::Write};

use crate::config::ProfileRuleSet;

pub mod args;
pub mod profile;

pub use args::{classify, StructuredCommand, PROFILED_ACTIONS};
pub use profile::{resolve_profile, ProfileResolution};

/// Arguments as the OS delivered them, paired with their classification.
///
/// Classification sees a lossy UTF-8 copy; the wrapped tool receives the
/// original arguments from [`Invocation::forwarded_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    original: Vec<OsString>,
    pub command: StructuredCommand,
}

impl Invocation {
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let original: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let command = classify(original.iter().map(|arg| arg.to_string_lossy().into_owned()));
        Self { original, command }
    }

    /// Original arguments followed by any tokens appended to the command.
    pub fn forwarded_args(&self) -> Vec<OsString> {
        let appended = self
            .command
            .raw_tokens
            .iter()
            .skip(self.original.len())
            .map(OsString::from);
        self.original.iter().cloned().chain(appended).collect()
    }
}

/// Inject a profile into `command` when the rule set has one for its stack.
///
/// Returns the injected profile, or `None` when the command already carried a
/// profile, its action is not stack-scoped, or no rule matched.
pub fn apply_profile_rules(
    command: &mut StructuredCommand,
    rules: &ProfileRuleSet,
    out: &mut impl Write,
) -> Option<String> {
    if !command.should_resolve_profile() {
        return None;
    }

    let profile = resolve_profile(&command.target_name, rules, out).into_option()?;
    command.set_profile(profile.clone());
    Some(profile)
}
