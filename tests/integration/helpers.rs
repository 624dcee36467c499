//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the ANSI fixture files.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file to a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// A `Command` for the ansifade binary with a predictable environment.
///
/// The config file points into `config_dir` and the color-related variables
/// of the test runner are cleared.
pub fn ansifade_command(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansifade"));
    cmd.env("ANSIFADE_CONFIG", config_dir.join("config.toml"))
        .env_remove("ANSIFADE_LOG")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("COLORTERM")
        .env_remove("COLORFGBG")
        .env("TERM", "dumb");
    cmd
}

/// Run ansifade with `args` and capture `(stdout, stderr, exit_code)`.
pub fn run_ansifade(args: &[&str]) -> (String, String, i32) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let output = ansifade_command(config_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute ansifade");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
