//! End-to-end runs against fake `container` and `codex` programs.
//!
//! Each fake appends its arguments to `$PETREL_TEST_LOG`.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_CONTAINER: &str = r#"#!/bin/sh
echo "$*" >> "$PETREL_TEST_LOG"
case "$1 $2" in
  "system status") echo "${FAKE_STATUS:-apiserver is running}" ;;
  "images inspect") exit 1 ;;
esac
exit 0
"#;

const FAKE_CODEX: &str = r#"#!/bin/sh
echo "codex-cli 0.39.0"
"#;

struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new(with_codex: bool) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        for dir in ["bin", "home", "work"] {
            std::fs::create_dir(root.path().join(dir)).expect("mkdir");
        }
        write_script(&root.path().join("bin").join("container"), FAKE_CONTAINER);
        if with_codex {
            write_script(&root.path().join("bin").join("codex"), FAKE_CODEX);
        }
        Self { root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn petrel(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("petrel"));
        cmd.env("NO_COLOR", "1")
            .env("PATH", self.path("bin"))
            .env("HOME", self.path("home"))
            .env("PETREL_TEST_LOG", self.path("calls.log"))
            .env_remove("PETREL_CONFIG")
            .current_dir(self.path("work"));
        cmd
    }

    fn calls(&self) -> String {
        std::fs::read_to_string(self.path("calls.log")).unwrap_or_default()
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
}

#[test]
fn build_tags_version_and_latest() {
    let sandbox = Sandbox::new(true);

    sandbox.petrel().args(["--yes", "build"]).assert().success();

    let calls = sandbox.calls();
    assert!(calls.contains("system status"));
    assert!(calls.contains("build --tag codex:0.39.0 --tag codex:latest --file"));
    assert!(!calls.contains("--no-cache"));
}

#[test]
fn rebuild_disables_the_layer_cache() {
    let sandbox = Sandbox::new(true);

    sandbox
        .petrel()
        .args(["--yes", "build", "--rebuild", "--tag", "mine:old"])
        .assert()
        .success();

    assert!(
        sandbox
            .calls()
            .contains("build --no-cache --tag mine:0.39.0 --tag mine:latest")
    );
}

#[test]
fn missing_tool_is_a_hard_error() {
    let sandbox = Sandbox::new(false);

    sandbox
        .petrel()
        .args(["--yes", "build"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("codex version"));

    assert!(!sandbox.calls().contains("build"));
}

#[test]
fn stopped_engine_without_auto_start_fails() {
    let sandbox = Sandbox::new(true);

    sandbox
        .petrel()
        .env("FAKE_STATUS", "apiserver is not started")
        .args(["--yes", "build", "--no-auto-start"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("container system start"));

    assert!(!sandbox.calls().contains("system start"));
}

#[test]
fn stopped_engine_is_started() {
    let sandbox = Sandbox::new(true);

    sandbox
        .petrel()
        .env("FAKE_STATUS", "apiserver is not started")
        .args(["--yes", "build"])
        .assert()
        .success();

    let calls = sandbox.calls();
    let start = calls.find("system start").expect("started");
    let build = calls.find("build --tag").expect("built");
    assert!(start < build);
}

#[test]
fn codex_builds_missing_image_then_runs_it() {
    let sandbox = Sandbox::new(true);
    let repo = sandbox.path("work");

    sandbox
        .petrel()
        .args(["--yes", "codex", "--repo-dir"])
        .arg(&repo)
        .args(["exec", "--full-auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing: container run"));

    let calls = sandbox.calls();
    assert!(calls.contains("build --tag codex:0.39.0 --tag codex:latest"));
    let run_line = calls
        .lines()
        .find(|l| l.starts_with("run "))
        .expect("run invoked");
    assert!(run_line.starts_with("run --name codex-test --rm -it"));
    assert!(run_line.contains("/home/linuxbrew/repo"));
    assert!(run_line.contains("codex:0.39.0 /home/linuxbrew/.linuxbrew/bin/codex exec --full-auto"));

    assert!(sandbox.path("home").join(".codex-container").is_dir());
    assert!(sandbox.path("home").join(".cache").join("petrel").join("uv_cache").is_dir());
}

#[test]
fn codex_rejects_missing_repo_dir_before_touching_the_engine() {
    let sandbox = Sandbox::new(true);

    sandbox
        .petrel()
        .args(["--yes", "codex", "--repo-dir"])
        .arg(sandbox.path("no-such-repo"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot resolve repository directory"));

    let calls = sandbox.calls();
    assert!(!calls.contains("build"), "no build for a bad repo dir: {calls}");
    assert!(!calls.contains("images inspect"));
    assert!(!calls.contains("system status"));
}

#[test]
fn codex_shell_runs_bash() {
    let sandbox = Sandbox::new(true);

    sandbox
        .petrel()
        .args(["--yes", "codex", "--shell", "--name", "scratch"])
        .assert()
        .success();

    let calls = sandbox.calls();
    let run_line = calls
        .lines()
        .find(|l| l.starts_with("run "))
        .expect("run invoked");
    assert!(run_line.starts_with("run --name scratch"));
    assert!(run_line.ends_with("codex:0.39.0 /bin/bash"));
}
