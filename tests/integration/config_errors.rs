use std::process::Command;

use crate::common::{fixture, run_wrapper, stderr_of, BINARY_PATH};

#[test]
fn missing_config_file_is_fatal() {
    let output = run_wrapper(std::path::Path::new("/does/not/exist"), &["deploy", "Stack"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error loading config"), "stderr: {stderr}");
    assert!(
        stderr.contains("could not read config file at /does/not/exist"),
        "stderr: {stderr}"
    );
}

#[test]
fn malformed_config_file_is_fatal() {
    let path = fixture("tests/fixtures/cdkpw_invalid.yml");
    let output = run_wrapper(&path, &["deploy", "Stack"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("invalid YAML in {}", path.display())),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_home_directory_is_fatal() {
    let output = Command::new(BINARY_PATH)
        .args(["deploy", "Stack"])
        .env_remove("CDKPW_CONFIG")
        .env_remove("HOME")
        .output()
        .expect("wrapper should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("unable to determine config directory"),
        "stderr: {stderr}"
    );
}

#[test]
fn config_is_read_from_home_when_override_is_absent() {
    let home = tempfile::tempdir().expect("can create temporary home");
    let output = Command::new(BINARY_PATH)
        .args(["deploy", "Stack"])
        .env_remove("CDKPW_CONFIG")
        .env("HOME", home.path())
        .output()
        .expect("wrapper should start");

    assert_eq!(output.status.code(), Some(1));
    let expected = home.path().join(".cdk").join(".cdkpw.yml");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("could not read config file at {}", expected.display())),
        "stderr: {stderr}"
    );
}
