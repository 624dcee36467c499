//! Integration tests for the ansifade CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{ansifade_command, fixtures_dir, load_fixture, run_ansifade};

/// assert_cmd wrapper around [`ansifade_command`].
fn ansifade(config_dir: &TempDir) -> Command {
    Command::from_std(ansifade_command(config_dir.path()))
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_ansifade(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["fade", "interpolate", "detect", "config", "completions"] {
        assert!(stdout.contains(name), "missing {} in help", name);
    }
}

#[test]
fn fade_help_mentions_modes() {
    let (stdout, _stderr, exit_code) = run_ansifade(&["fade", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--background"));
    assert!(stdout.contains("--force"));
    assert!(stdout.contains("truecolor"));
    assert!(stdout.contains("256"));
}

// ============================================================================
// Interpolate
// ============================================================================

#[test]
fn interpolate_prints_hex() {
    let (stdout, stderr, exit_code) = run_ansifade(&["interpolate", "#ff0000", "#0000ff"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @"#800080");
}

#[test]
fn interpolate_clamps_negative_factor() {
    let (stdout, _stderr, exit_code) =
        run_ansifade(&["interpolate", "#123456", "#abcdef", "-f", "-1.5"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "#123456");
}

#[test]
fn interpolate_json_has_all_representations() {
    let (stdout, _stderr, exit_code) =
        run_ansifade(&["interpolate", "#000000", "#ffffff", "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["hex"], "#808080");
    assert_eq!(value["rgb"]["red"], 128);
    assert_eq!(value["hsl"]["saturation"], 0.0);
    assert!(value["hsl"]["lightness"].as_f64().unwrap() > 50.0);
}

#[test]
fn interpolate_invalid_color_exits_1() {
    let (stdout, stderr, exit_code) = run_ansifade(&["interpolate", "ff0000", "#00ff00"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid color 'ff0000'"));
}

// ============================================================================
// Fade
// ============================================================================

#[test]
fn fade_forced_with_explicit_colors_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let output = ansifade(&dir)
        .args(["fade", "--force", "--background", "#000000", "--foreground", "#ffffff"])
        .write_stdin(load_fixture("red_text.txt"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    insta::assert_snapshot!(
        format!("{:?}", String::from_utf8(output).unwrap()),
        @r#""\u{1b}[38;2;128;0;0mRed text\u{1b}[0m\u{1b}[38;2;128;128;128m\n\u{1b}[0m""#
    );
}

#[test]
fn fade_reads_file_argument() {
    let dir = TempDir::new().unwrap();
    let path = fixtures_dir().join("red_text.txt");
    ansifade(&dir)
        .arg("fade")
        .arg(&path)
        .args(["--force", "--background", "#000000", "--foreground", "#ffffff"])
        .args(["-f", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[38;2;255;0;0mRed text\x1b[0m"));
}

#[test]
fn fade_in_256_color_mode() {
    let dir = TempDir::new().unwrap();
    ansifade(&dir)
        .args(["fade", "--force", "--mode", "256", "-f", "1"])
        .args(["--background", "#000000", "--foreground", "#ffffff"])
        .write_stdin("\x1b[38;2;95;135;175msteel")
        .assert()
        .success()
        .stdout("\x1b[38;5;67msteel\x1b[0m");
}

#[test]
fn fade_without_truecolor_prints_input_unchanged() {
    let dir = TempDir::new().unwrap();
    let content = load_fixture("mixed.txt");
    ansifade(&dir)
        .args(["fade", "--background", "#000000", "--foreground", "#ffffff"])
        .write_stdin(content.clone())
        .assert()
        .success()
        .stdout(content)
        .stderr(predicate::str::contains("does not support truecolor"));
}

#[test]
fn fade_honours_clicolor_force_and_colorterm() {
    let dir = TempDir::new().unwrap();
    ansifade(&dir)
        .env("CLICOLOR_FORCE", "1")
        .env("COLORTERM", "truecolor")
        .args(["fade", "--background", "#000000", "--foreground", "#ffffff"])
        .write_stdin("\x1b[31mx")
        .assert()
        .success()
        .stdout("\x1b[38;2;128;0;0mx\x1b[0m");
}

#[test]
fn fade_invalid_color_exits_1() {
    let dir = TempDir::new().unwrap();
    ansifade(&dir)
        .args(["fade", "--force", "--background", "#00000", "--foreground", "#ffffff"])
        .write_stdin("text")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid color '#00000'"));
}

#[test]
fn fade_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    ansifade(&dir)
        .args(["fade", "--force", "no/such/file.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no/such/file.txt"));
}

#[test]
fn fade_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[fade]\nfactor = 0.0\nbackground = \"#102030\"\nforeground = \"#ffffff\"\n\n\
         [terminal]\nforce_truecolor = true\n",
    )
    .unwrap();

    ansifade(&dir)
        .arg("fade")
        .write_stdin("\x1b[31mx")
        .assert()
        .success()
        .stdout("\x1b[38;2;16;32;48mx\x1b[0m");
}

#[test]
fn fade_flags_override_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[fade]\nfactor = 0.0\nbackground = \"#102030\"\nforeground = \"#ffffff\"\n",
    )
    .unwrap();

    ansifade(&dir)
        .args(["fade", "--force", "-f", "1", "--background", "#000000"])
        .write_stdin("\x1b[31mx")
        .assert()
        .success()
        .stdout("\x1b[38;2;255;0;0mx\x1b[0m");
}

#[test]
fn fade_without_cache_matches_cached_output() {
    let cached_dir = TempDir::new().unwrap();
    let uncached_dir = TempDir::new().unwrap();
    std::fs::write(
        uncached_dir.path().join("config.toml"),
        "[cache]\nenabled = false\n",
    )
    .unwrap();

    let args = ["fade", "--force", "--background", "#282828", "--foreground", "#ebdbb2"];
    let content = load_fixture("mixed.txt");
    let cached = ansifade(&cached_dir)
        .args(args)
        .write_stdin(content.clone())
        .output()
        .unwrap();
    let uncached = ansifade(&uncached_dir)
        .args(args)
        .write_stdin(content)
        .output()
        .unwrap();

    assert!(cached.status.success());
    assert_eq!(cached.stdout, uncached.stdout);
}

// ============================================================================
// Detect and Completions
// ============================================================================

#[test]
fn detect_json_without_a_terminal() {
    let dir = TempDir::new().unwrap();
    let output = ansifade(&dir)
        .env("COLORFGBG", "15;0")
        .args(["detect", "--json"])
        .write_stdin("")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["profile"], "ascii");
    assert_eq!(value["truecolor"], false);
    assert_eq!(value["background"], "#000000");
    assert_eq!(value["foreground"], "#ffffff");
}

#[test]
fn completions_for_bash() {
    let (stdout, _stderr, exit_code) = run_ansifade(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ansifade"));
    assert!(stdout.contains("interpolate"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    ansifade(&dir)
        .args(["-vv", "fade", "--force", "--background", "#000000", "--foreground", "#ffffff"])
        .write_stdin("\x1b[31mx")
        .assert()
        .success()
        .stdout("\x1b[38;2;128;0;0mx\x1b[0m")
        .stderr(predicate::str::contains("Faded input"));
}
