//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HARD_SENTENCE: &str = "The extension highlights lengthy, complex sentences and common errors; if you see a hard sentence, shorten or split it.";
const VERY_HARD_SENTENCE: &str = "If you see a very hard highlight, your sentence is so dense and complicated that your readers will get lost trying to follow its meandering, splitting logic \u{2014} try editing this sentence to remove the highlight.";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `contents` to `name` inside `dir` and return the full path.
fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["rules"].is_array());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_reports_complex_word_with_one_based_position() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", "here's a number of words.\n");

    cmd()
        .args(["--color", "never", "check"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ":1:8: information[complex-word]: Complex. Omit or replace with 'many' or 'some'.",
        ))
        .stdout(predicate::str::contains("1 issue(s) in 1 file(s), 0 warning(s)"));
}

#[test]
fn check_clean_file_passes() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", "Plain words.\n");

    cmd()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues in 1 file(s)"));
}

#[test]
fn check_json_lists_diagnostics_per_file() {
    let tmp = TempDir::new().unwrap();
    let first = write_file(
        tmp.path(),
        "first.md",
        "This sentence should be marked for passive language.\n",
    );
    let second = write_file(tmp.path(), "second.md", "Plain words.\n");

    let output = cmd()
        .args(["check", "--json"])
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    let diagnostics = reports[0]["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["rule"], "passive-voice");
    assert_eq!(diagnostics[0]["message"], "Passive voice. Use active voice.");
    assert_eq!(diagnostics[0]["range"]["start"]["line"], 0);
    assert_eq!(diagnostics[0]["range"]["start"]["character"], 21);
    assert_eq!(diagnostics[0]["range"]["end"]["character"], 30);
    assert!(reports[1]["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn check_rule_flag_limits_rules() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "doc.md",
        "perhaps a number of changes were needed here.\n",
    );

    cmd()
        .args(["--color", "never", "check", "--rule", "qualifier"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[qualifier]"))
        .stdout(predicate::str::contains("[complex-word]").not())
        .stdout(predicate::str::contains("[passive-voice]").not());
}

#[test]
fn check_exclude_skips_rule() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "doc.md",
        "This sentence should be marked for passive language.\n",
    );

    cmd()
        .args(["check", "--exclude", "passive-voice"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
fn check_unknown_rule_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", "Plain words.\n");

    cmd()
        .args(["check", "--rule", "spelling"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn check_strict_fails_on_warning() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", &format!("{VERY_HARD_SENTENCE}\n"));

    cmd()
        .args(["--color", "never", "check"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ":1:1: warning[sentence-difficulty]: Very hard sentence. Shorten or split it.",
        ));

    cmd()
        .args(["check", "--strict"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("warning(s) reported"));
}

#[test]
fn check_strict_ignores_information() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", &format!("{HARD_SENTENCE}\n"));

    cmd()
        .args(["check", "--strict"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hard sentence. Shorten or split it."));
}

#[test]
fn check_keep_trailing_reports_unterminated_sentence() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "doc.md", "It was finished yesterday\n");

    cmd()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));

    cmd()
        .args(["check", "--keep-trailing"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[passive-voice]"));
}

#[test]
fn check_skips_sentence_checks_in_code_fences() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "doc.md",
        "Intro text.\n\n```\nthe door was opened\n```\n\nOutro text.\n",
    );

    cmd()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
fn check_missing_file_fails() {
    cmd()
        .args(["check", "/nonexistent/doc.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn check_requires_a_file() {
    cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_enforces_input_limit() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(tmp.path(), "limit.toml", "max_input_bytes = 10\n");
    let file = write_file(tmp.path(), "doc.md", "This is longer than ten bytes.\n");

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Sentences Command
// =============================================================================

#[test]
fn sentences_prints_ranges_and_scores() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "doc.md",
        "This is a complete sentence.This is a complete sentence.\n",
    );

    cmd()
        .args(["--color", "never", "sentences"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1:1-1:29   5 This is a complete sentence.",
        ))
        .stdout(predicate::str::contains(
            "1:29-1:57   5 This is a complete sentence.",
        ));
}

#[test]
fn sentences_min_score_filters() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "doc.md",
        &format!("This is a simple sentence.\n{HARD_SENTENCE}\n"),
    );

    let output = cmd()
        .args(["sentences", "--json", "--min-score", "10"])
        .arg(&file)
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let sentences = json.as_array().unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0]["score"], 13);
    assert_eq!(sentences[0]["range"]["start"]["line"], 1);
}

// =============================================================================
// Serve Command
// =============================================================================

#[test]
fn serve_help_shows_usage() {
    cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
