//! Integration tests for autowin CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::Command;

/// Execute 'autowin tools' and verify it succeeds
fn run_tools() -> std::process::Output {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["tools"])
        .output()
        .expect("Failed to execute 'autowin tools'");

    assert!(
        output.status.success(),
        "autowin tools failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_tools();

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let output = run_tools();

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

/// The tools report lists every declared executable
#[test]
fn test_tools_lists_all_declared_executables() {
    let output = run_tools();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for tool in ["xdotool", "xsel", "xwininfo", "xkill"] {
        assert!(
            stdout.contains(tool),
            "tools output should mention {}, got: {}",
            tool,
            stdout
        );
    }
}

/// The JSON tools report is valid JSON with one entry per tool
#[test]
fn test_tools_json_output_parses() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["tools", "--json"])
        .output()
        .expect("Failed to execute 'autowin tools --json'");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("tools --json should emit valid JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(4));
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify verbose mode (-v) emits INFO logs
#[test]
fn test_verbose_flag_emits_info_logs() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["-v", "tools"])
        .output()
        .expect("Failed to execute 'autowin -v tools'");

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    // The tools command itself logs nothing above debug; verbose mode is
    // verified by the absence of filtering rather than specific events here,
    // so drive a command that logs at info level instead.
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["-v", "exists", "autowin-test-window-that-does-not-exist"])
        .output()
        .expect("Failed to execute 'autowin -v exists'");
    let exists_stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        exists_stderr.contains(r#""level":"INFO""#) || stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {}",
        exists_stderr
    );
}

// =============================================================================
// Window Command Behavioral Tests
// =============================================================================

/// `exists` on a window no host will have prints false and exits 0
#[test]
fn test_exists_missing_window_prints_false() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["exists", "AUTOWIN_NONEXISTENT_WINDOW_12345_UNIQUE"])
        .output()
        .expect("Failed to execute 'autowin exists'");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

/// Operations needing a live window fail cleanly when none matches
#[test]
fn test_state_missing_window_fails_with_not_found() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["state", "AUTOWIN_NONEXISTENT_WINDOW_12345_UNIQUE"])
        .output()
        .expect("Failed to execute 'autowin state'");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Window not found"),
        "stderr should carry the not-found identity, got: {}",
        stderr
    );
    assert!(
        stderr.contains("AUTOWIN_NONEXISTENT_WINDOW_12345_UNIQUE"),
        "stderr should name the window title, got: {}",
        stderr
    );
}

// =============================================================================
// Metadata Tests
// =============================================================================

#[test]
fn test_help_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["--help"])
        .output()
        .expect("Failed to execute 'autowin --help'");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("autowin"));
    assert!(stdout.contains("exists"));
    assert!(stdout.contains("wait"));
}

#[test]
fn test_version_matches_version_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .args(["--version"])
        .output()
        .expect("Failed to execute 'autowin --version'");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(autowin_core::version()));
}

#[test]
fn test_no_arguments_shows_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_autowin"))
        .output()
        .expect("Failed to execute 'autowin'");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage") || stderr.contains("usage"));
}
