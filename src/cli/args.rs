//! Invocation classification for the wrapped tool's argument list.

const PROFILE_FLAG: &str = "--profile";
const CONTEXT_SHORT: &str = "-c";
const CONTEXT_LONG: &str = "--context";

/// Actions for which a profile is inferred from the stack name.
pub const PROFILED_ACTIONS: [&str; 4] = ["diff", "deploy", "destroy", "bootstrap"];

/// A user invocation split into the fields the wrapper cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredCommand {
    /// `diff`, `deploy`, etc.
    pub action: String,
    /// First non-flag positional token.
    pub target_name: String,
    /// Value of `--profile`, if present.
    pub profile: String,
    /// All `-c` / `--context` switches with their values.
    pub context_values: Vec<String>,
    /// Any other flags (e.g. `--exclusively`).
    pub other_flags: Vec<String>,
    /// Tokens as classified, lossily decoded to UTF-8.
    pub raw_tokens: Vec<String>,
}

impl StructuredCommand {
    /// Inject a profile unless one is already set.
    pub fn set_profile(&mut self, profile: impl Into<String>) {
        if self.is_profiled() {
            return;
        }
        let profile = profile.into();
        self.raw_tokens.push(PROFILE_FLAG.to_string());
        self.raw_tokens.push(profile.clone());
        self.profile = profile;
    }

    pub fn is_profiled(&self) -> bool {
        !self.profile.is_empty()
    }

    /// True when no profile was given and the action is one that targets a stack.
    pub fn should_resolve_profile(&self) -> bool {
        !self.is_profiled() && PROFILED_ACTIONS.contains(&self.action.as_str())
    }
}

/// Split raw tokens into a [`StructuredCommand`]. Never fails.
pub fn classify<I, S>(tokens: I) -> StructuredCommand
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let raw_tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let mut command = StructuredCommand::default();

    let Some((action, rest)) = raw_tokens.split_first() else {
        return command;
    };
    command.action = action.clone();

    let mut iter = rest.iter();
    while let Some(token) = iter.next() {
        let token = token.as_str();

        if token == PROFILE_FLAG {
            if let Some(value) = iter.next() {
                if command.profile.is_empty() {
                    command.profile = value.clone();
                }
                continue;
            }
        }

        if is_context_flag(token) {
            command.context_values.push(token.to_string());
            if token == CONTEXT_SHORT || token == CONTEXT_LONG {
                if let Some(value) = iter.next() {
                    command.context_values.push(value.clone());
                }
            }
        } else if token.starts_with('-') {
            command.other_flags.push(token.to_string());
        } else if command.target_name.is_empty() {
            command.target_name = token.to_string();
        }
    }

    command.raw_tokens = raw_tokens;
    command
}

fn is_context_flag(token: &str) -> bool {
    token.starts_with(CONTEXT_SHORT) || token.starts_with(CONTEXT_LONG)
}
