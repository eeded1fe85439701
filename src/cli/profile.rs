//! Profile resolution from stack-name patterns.
use std::io::Write;

use tracing::debug;

use crate::config::{ProfileRule, ProfileRuleSet};

/// Outcome of matching a stack name against the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResolution {
    pub profile: String,
    pub found: bool,
}

impl ProfileResolution {
    fn not_found() -> Self {
        Self {
            profile: String::new(),
            found: false,
        }
    }

    pub fn into_option(self) -> Option<String> {
        self.found.then_some(self.profile)
    }
}

/// Pick the most specific rule whose pattern occurs in `target_name`.
///
/// Longer patterns win; ties keep the rule listed first. When the rule set is
/// not silent, a one-line notice is written to `out`; write failures are
/// ignored.
pub fn resolve_profile(
    target_name: &str,
    rules: &ProfileRuleSet,
    out: &mut impl Write,
) -> ProfileResolution {
    if target_name.is_empty() {
        return ProfileResolution::not_found();
    }

    let candidates: Vec<&ProfileRule> = rules
        .rules
        .iter()
        .filter(|rule| rule.matches(target_name))
        .collect();

    let Some(best) = most_specific(&candidates) else {
        debug!(
            target: "cdkpw::resolver",
            target_name,
            rules = rules.rules.len(),
            "No profile rule matched"
        );
        return ProfileResolution::not_found();
    };

    debug!(
        target: "cdkpw::resolver",
        target_name,
        candidates = candidates.len(),
        pattern = %best.match_pattern,
        profile = %best.profile_name,
        "Selected profile rule"
    );

    if !rules.verbosity.is_silent() {
        let _ = writeln!(
            out,
            "cdkpw: Using profile {} for stack {}",
            best.profile_name, target_name
        );
    }

    ProfileResolution {
        profile: best.profile_name.clone(),
        found: true,
    }
}

fn most_specific<'a>(candidates: &[&'a ProfileRule]) -> Option<&'a ProfileRule> {
    let (first, rest) = candidates.split_first()?;
    let mut best = *first;
    for &rule in rest {
        if rule.match_pattern.len() > best.match_pattern.len() {
            best = rule;
        }
    }
    Some(best)
}
