//! CLI Interface E2E Tests
//!
//! These tests run the `lox` binary against the fixtures directory and check
//! token output, diagnostics and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// A `lox` command isolated from any configuration on the host.
fn lox(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lox"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("LOX_VERBOSE")
        .env_remove("LOX_CONFIG")
        .env_remove("LOX_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--format")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_clean_script() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("VAR var null\nIDENTIFIER greeting null\nEQUAL = null\n")
                .and(predicate::str::contains("STRING \"hello\" hello\n"))
                .and(predicate::str::ends_with("SEMICOLON ; null\nEOF  null\n")),
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_program_with_operators() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg(fixtures_dir().join("fib.lox"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LESS_EQUAL <= null")
                .and(predicate::str::contains("BANG_EQUAL != null"))
                .and(predicate::str::contains("NUMBER 6765.0 6765"))
                .and(predicate::str::contains("fibonacci").not()),
        );
}

#[test]
fn test_run_script_with_errors() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg(fixtures_dir().join("errors.lox"))
        .assert()
        .code(65)
        .stdout(predicate::str::contains("PRINT print null").and(predicate::str::ends_with("EOF  null\n")))
        .stderr(
            predicate::str::contains("[line 1] Error: Unexpected character '@'.")
                .and(predicate::str::contains("  1 | var x = @;"))
                .and(predicate::str::contains("[line 3] Error: Unterminated string."))
                .and(predicate::str::contains("= note: string starts on line 2"))
                .and(predicate::str::contains("scan failed").not()),
        );
}

#[test]
fn test_no_snippets_flag() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg("--no-snippets")
        .arg(fixtures_dir().join("errors.lox"))
        .assert()
        .code(65)
        .stderr(predicate::str::contains("[line 1] Error").and(predicate::str::contains(" | ").not()));
}

#[test]
fn test_json_format() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .args(["--format", "json"])
        .arg(fixtures_dir().join("fib.lox"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""kind":"NUMBER""#)
                .and(predicate::str::contains(r#"{"kind":"EOF","lexeme":"","literal":null,"line":8}"#)),
        );
}

#[test]
fn test_two_scripts_is_usage_error() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg(fixtures_dir().join("hello.lox"))
        .arg(fixtures_dir().join("fib.lox"))
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: lox [script]"));
}

#[test]
fn test_missing_script() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .arg("does_not_exist.lox")
        .assert()
        .code(74)
        .stderr(predicate::str::contains("could not read file at does_not_exist.lox"));
}

#[test]
fn test_prompt_continues_after_errors() {
    let home = TempDir::new().expect("Failed to create temp directory");
    lox(&home)
        .write_stdin("print 1;\n@\nvar a;\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("> PRINT print null")
                .and(predicate::str::contains("VAR var null"))
                .and(predicate::str::ends_with("> ")),
        )
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character '@'."));
}

#[test]
fn test_config_file_settings() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "prompt = \"lox> \"\nformat = \"json\"\n").expect("Failed to write config");

    lox(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("nil\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"lox> {"kind":"NIL""#));
}

#[test]
fn test_config_discovered_in_current_dir() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(home.path().join("lox.toml"), "snippets = false\n").expect("Failed to write config");

    lox(&home)
        .write_stdin("#\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character '#'.").and(predicate::str::contains(" | ").not()));
}

#[test]
fn test_format_flag_overrides_config() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(home.path().join("lox.toml"), "format = \"json\"\n").expect("Failed to write config");

    lox(&home)
        .args(["--format", "plain"])
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("VAR var null"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "format = 3\n").expect("Failed to write config");

    lox(&home)
        .arg("--config")
        .arg(&config)
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Configuration error"));
}
