//! CLI smoke tests for the lorekeep-server binary.
//!
//! These verify configuration validation, help output, and the commands
//! that complete without starting the HTTP listener.

use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run the lorekeep-server binary with the given arguments and an
/// isolated HOME so nothing leaks into the real user directory.
fn run_lorekeep_server(args: &[&str], home: &TempDir) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lorekeep-server"))
        .args(args)
        .env("HOME", home.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute lorekeep-server")
}

#[test]
fn test_cli_help_command() {
    let home = TempDir::new().unwrap();
    let output = run_lorekeep_server(&["--help"], &home);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lorekeep-server"), "Should contain binary name");
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let home = TempDir::new().unwrap();
    let output = run_lorekeep_server(&["--version"], &home);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lorekeep-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let home = TempDir::new().unwrap();
    let output = run_lorekeep_server(&["invalid-command"], &home);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_check_with_config_file() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("lorekeep.yaml");
    std::fs::write(
        &config_path,
        r#"
server:
  home_dir: ""
  host: "127.0.0.1"
  port: 4010
database:
  url: "sqlite://database/lorekeep.db"
  max_conns: 5
logging:
  level: "debug"
"#,
    )
    .unwrap();

    let output = run_lorekeep_server(
        &["--config", config_path.to_str().unwrap(), "check"],
        &home,
    );

    assert!(output.status.success(), "Check command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("port: 4010"));
    assert!(stdout.contains("level: debug"));
}

#[test]
fn test_print_config_uses_defaults_without_file() {
    let home = TempDir::new().unwrap();
    let output = run_lorekeep_server(&["--print-config"], &home);

    assert!(output.status.success(), "print-config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"));
    assert!(stdout.contains("database:"));
    assert!(stdout.contains("port: 3000"));
}

#[test]
fn test_port_override_shows_in_printed_config() {
    let home = TempDir::new().unwrap();
    let output = run_lorekeep_server(&["--print-config", "--port", "9099"], &home);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9099"));
}
