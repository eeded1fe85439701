#![cfg(unix)]

use crate::common::{run_wrapper, stderr_of, stdout_of, ConfigDir};

const ECHO_RULES: &str = "\
profiles:
  - match: Prod
    profile: prod_admin
  - match: Api
    profile: api_admin
  - match: CustomerApi
    profile: cust_admin
cdkLocation: /bin/echo
";

#[test]
fn injects_profile_for_matching_stack() {
    let config = ConfigDir::with_yaml(ECHO_RULES);
    let output = run_wrapper(&config.path(), &["deploy", "ProdAppStack", "--exclusively"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "deploy ProdAppStack --exclusively --profile prod_admin\n"
    );
}

#[test]
fn most_specific_rule_wins_end_to_end() {
    let config = ConfigDir::with_yaml(ECHO_RULES);
    let output = run_wrapper(&config.path(), &["diff", "CustomerApiStack"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "diff CustomerApiStack --profile cust_admin\n"
    );
}

#[test]
fn explicit_profile_is_forwarded_verbatim() {
    let config = ConfigDir::with_yaml(ECHO_RULES);
    let output = run_wrapper(
        &config.path(),
        &["deploy", "ProdAppStack", "--profile", "mine", "-c", "env=prod"],
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "deploy ProdAppStack --profile mine -c env=prod\n"
    );
}

#[test]
fn non_stack_actions_are_not_rewritten() {
    let config = ConfigDir::with_yaml(ECHO_RULES);
    let output = run_wrapper(&config.path(), &["synth", "ProdAppStack"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "synth ProdAppStack\n");
}

#[test]
fn verbose_config_announces_profile() {
    let config = ConfigDir::with_yaml(&format!("{ECHO_RULES}verbose: 1\n"));
    let output = run_wrapper(&config.path(), &["destroy", "ProdAppStack"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "cdkpw: Using profile prod_admin for stack ProdAppStack\n\
         destroy ProdAppStack --profile prod_admin\n"
    );
}

#[test]
fn tool_location_expands_environment_variables() {
    let config = ConfigDir::with_yaml("cdkLocation: ${CDKPW_TEST_BIN}/echo\n");
    let output = std::process::Command::new(crate::common::BINARY_PATH)
        .args(["ls"])
        .env("CDKPW_CONFIG", config.path())
        .env("CDKPW_TEST_BIN", "/bin")
        .output()
        .expect("wrapper should start");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "ls\n");
}

#[test]
fn exit_code_of_wrapped_tool_is_propagated() {
    let config = ConfigDir::with_yaml("cdkLocation: /bin/sh\n");
    let output = run_wrapper(&config.path(), &["-c", "exit 7"]);

    assert_eq!(output.status.code(), Some(7));
    assert!(
        stderr_of(&output).contains("Error running cdk command: exit status: 7"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[test]
fn missing_tool_fails_with_generic_code() {
    let config = ConfigDir::with_yaml("cdkLocation: /nonexistent/cdkpw/cdk\n");
    let output = run_wrapper(&config.path(), &["deploy", "Stack"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("failed to start `/nonexistent/cdkpw/cdk`"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[test]
fn non_utf8_arguments_reach_the_tool_unchanged() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let config = ConfigDir::with_yaml(ECHO_RULES);
    let output = std::process::Command::new(crate::common::BINARY_PATH)
        .arg("deploy")
        .arg(OsStr::from_bytes(b"Prod\xffStack"))
        .env("CDKPW_CONFIG", config.path())
        .env_remove("CDKPW_LOG")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("wrapper should start");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(output.stdout, b"deploy Prod\xffStack --profile prod_admin\n");
}
