//! Integration tests for the command surface and the render-only command.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn petrel() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("petrel"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    petrel()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_commands() {
    petrel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("codex"))
        .stdout(predicate::str::contains("dockerfile"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    petrel()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("petrel"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    petrel().arg("frobnicate").assert().code(2);
}

#[test]
fn test_no_color_env_accepts_any_non_empty_value() {
    for value in ["1", "yes", "true"] {
        Command::new(assert_cmd::cargo::cargo_bin!("petrel"))
            .env("NO_COLOR", value)
            .arg("dockerfile")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("FROM debian:latest"));
    }
}

#[test]
fn test_no_color_flag_still_parses() {
    petrel().args(["--no-color", "dockerfile"]).assert().success();
}

// --- dockerfile ---

#[test]
fn test_dockerfile_renders_builtin_template() {
    petrel()
        .arg("dockerfile")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FROM debian:latest"));
}

#[test]
fn test_dockerfile_renders_explicit_template_with_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("Dockerfile.j2");
    std::fs::write(&template, "FROM python:{{ PETREL_TEST_PY }}\n").expect("write");

    petrel()
        .env("PETREL_TEST_PY", "3.12")
        .arg("dockerfile")
        .arg("--file")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM python:3.12"));
}

#[test]
fn test_dockerfile_does_not_need_the_engine() {
    let empty = tempfile::tempdir().expect("tempdir");
    petrel()
        .env("PATH", empty.path())
        .arg("dockerfile")
        .assert()
        .success();
}

#[test]
fn test_dockerfile_missing_template_fails() {
    petrel()
        .args(["dockerfile", "--file", "/nonexistent/Dockerfile.j2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("/nonexistent/Dockerfile.j2"));
}

#[test]
fn test_dockerfile_syntax_error_is_render_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("bad.j2");
    std::fs::write(&template, "{% if %}").expect("write");

    petrel()
        .arg("dockerfile")
        .arg("-f")
        .arg(&template)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("render"));
}

// --- missing engine ---

#[test]
fn test_build_without_engine_shows_install_hint() {
    let empty = tempfile::tempdir().expect("tempdir");
    petrel()
        .env("PATH", empty.path())
        .env("HOME", empty.path())
        .args(["--yes", "build"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("brew install container"));
}

#[test]
fn test_codex_without_engine_shows_install_hint() {
    let empty = tempfile::tempdir().expect("tempdir");
    petrel()
        .env("PATH", empty.path())
        .env("HOME", empty.path())
        .args(["--yes", "codex"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("brew install container"));
}

#[test]
fn test_malformed_config_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "engine: 42\n").expect("write");

    petrel()
        .env("PETREL_CONFIG", &config)
        .args(["--yes", "build"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.yaml"));
}
