//! End-to-end tests for the two generator binaries.
//!
//! Runs the built executables and checks stdout, stderr and exit status.

use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run {} {:?}: {}", bin, args, e))
}

fn cylinder(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_generate-cylinder"), args)
}

fn wheel(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_generate-wheel"), args)
}

fn stdout_ok(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        output.status.success(),
        "command failed.\nstdout: {}\nstderr: {}",
        stdout,
        stderr
    );
    stdout
}

fn assert_fails_with(output: &Output, message: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "expected failure, stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "no output expected on failure");
    assert!(
        stderr.contains(message),
        "stderr should mention {:?}: {}",
        message,
        stderr
    );
}

// ── generate-cylinder ───────────────────────────────────────────────

#[test]
fn cylinder_three_by_two() {
    let out = stdout_ok(&cylinder(&["3", "2"]));
    assert_eq!(out, "1 2 4 3\n2 3 5 1\n3 1 6 2\n4 5 6 1\n5 6 4 2\n6 4 5 3\n");
}

#[test]
fn cylinder_line_count() {
    let out = stdout_ok(&cylinder(&["5", "4"]));
    assert_eq!(out.lines().count(), 20);
    assert!(out.ends_with('\n'));
}

#[test]
fn cylinder_output_is_deterministic() {
    let first = cylinder(&["6", "5"]);
    let second = cylinder(&["6", "5"]);
    assert_eq!(stdout_ok(&first), stdout_ok(&second));
}

#[test]
fn cylinder_rejects_two_columns() {
    let out = cylinder(&["2", "5"]);
    assert_fails_with(&out, "error: n must not be smaller than 3");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn cylinder_rejects_single_row() {
    assert_fails_with(&cylinder(&["3", "1"]), "error: m must not be smaller than 2");
}

#[test]
fn cylinder_rejects_non_integers() {
    assert_fails_with(&cylinder(&["a", "3"]), "error: n and m must be integers");
    assert_fails_with(&cylinder(&["3", "1e2"]), "error: n and m must be integers");
}

#[test]
fn cylinder_rejects_negative_numbers() {
    assert_fails_with(&cylinder(&["-4", "3"]), "error: n must not be smaller than 3");
}

#[test]
fn cylinder_wrong_argument_count_is_usage_error() {
    for args in [&[][..], &["3"][..], &["3", "3", "3"][..]] {
        let out = cylinder(args);
        assert!(!out.status.success());
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    }
}

#[test]
fn cylinder_json_and_stats() {
    let out = cylinder(&["3", "3", "--format", "json", "--stats", "--check"]);
    let stdout = stdout_ok(&out);
    let rows: Vec<Vec<usize>> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[3], vec![4, 5, 7, 6, 1]);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("9 Vertices"), "stderr: {}", stderr);
    assert!(stderr.contains("15 Edges"), "stderr: {}", stderr);
    assert!(stderr.contains("8 Faces"), "stderr: {}", stderr);
}

#[test]
fn cylinder_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cylinder-3x3.txt");
    let out = cylinder(&["3", "3", "-o", path.to_str().unwrap()]);
    assert!(stdout_ok(&out).is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, stdout_ok(&cylinder(&["3", "3"])));
}

// ── generate-wheel ──────────────────────────────────────────────────

#[test]
fn wheel_of_four() {
    let out = stdout_ok(&wheel(&["4"]));
    assert_eq!(out, "1 4 3 2\n2 4 1 3\n3 4 2 1\n4 1 2 3\n");
}

#[test]
fn wheel_hub_is_last_line() {
    let out = stdout_ok(&wheel(&["8"]));
    assert_eq!(out.lines().count(), 8);
    assert_eq!(out.lines().last(), Some("8 1 2 3 4 5 6 7"));
}

#[test]
fn wheel_rejects_three() {
    assert_fails_with(&wheel(&["3"]), "error: n must not be smaller than 4");
}

#[test]
fn wheel_rejects_non_integer() {
    assert_fails_with(&wheel(&["four"]), "error: n must be an integer");
}

#[test]
fn wheel_wrong_argument_count_is_usage_error() {
    for args in [&[][..], &["4", "5"][..]] {
        let out = wheel(args);
        assert!(!out.status.success());
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn wheel_stats_on_stderr_only() {
    let out = wheel(&["6", "--stats"]);
    let stdout = stdout_ok(&out);
    assert_eq!(stdout.lines().count(), 6);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("6 Vertices"));
    assert!(stderr.contains("10 Edges"));
    assert!(stderr.contains("6 Faces"));
    assert!(stderr.contains("0 Loops"));
}

#[test]
fn wheel_verbose_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("wheel.txt");
    let out = wheel(&["5", "-v", "--output", path.to_str().unwrap()]);
    assert!(stdout_ok(&out).is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("building wheel with 5 vertices"), "stderr: {}", stderr);
    assert!(Path::new(&path).exists());
}
