use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_cdkpw");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Scratch directory holding a rule file for one test.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn with_yaml(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("can create temporary directory");
        fs::write(dir.path().join("cdkpw.yml"), yaml).expect("can write config");
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("cdkpw.yml")
    }
}

/// Run the wrapper with `CDKPW_CONFIG` pointing at `config`.
pub fn run_wrapper(config: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .env("CDKPW_CONFIG", config)
        .env_remove("CDKPW_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("wrapper should start")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
