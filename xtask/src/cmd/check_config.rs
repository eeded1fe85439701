use std::path::PathBuf;

use anyhow::{Context, Result};
use cdkpw::{cli::resolve_profile, config::ProfileRuleSet, lib::paths};

pub fn run(path: Option<PathBuf>, stack: Option<String>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => paths::resolve_config_path()?,
    };
    let rules = ProfileRuleSet::load_from_path(path.clone())
        .with_context(|| format!("rule file {} is not usable", path.display()))?;

    print!("{}", render_summary(&rules));

    if let Some(stack) = stack {
        let resolution = resolve_profile(&stack, &rules, &mut std::io::sink());
        match resolution.into_option() {
            Some(profile) => println!("stack {stack} -> profile {profile}"),
            None => println!("stack {stack} -> no matching rule"),
        }
    }
    Ok(())
}

fn render_summary(rules: &ProfileRuleSet) -> String {
    let mut out = format!(
        "{}: {} rule(s), tool `{}`, verbosity {}\n",
        rules.source_path.display(),
        rules.rules.len(),
        rules.tool_location,
        rules.verbosity.as_str()
    );
    let width = rules
        .rules
        .iter()
        .map(|rule| rule.match_pattern.len())
        .max()
        .unwrap_or(0);
    for rule in &rules.rules {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            rule.match_pattern, rule.profile_name
        ));
    }
    out
}
