//! Launch assembly: mounts, run arguments, and the printed command.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use petrel_cli::application::services::launch::launch;
use petrel_cli::domain::mount::repo_cache_key;
use petrel_cli::domain::{EntryChoice, ImageReference, LaunchError, LaunchSpec, SessionPaths};

use crate::mocks::{CapturingLauncher, MemoryFs, MessageLog};

fn paths() -> SessionPaths {
    SessionPaths {
        repo_dir: PathBuf::from("/work/my repo"),
        persistent_dir: PathBuf::from("/home/u/.codex-container"),
        dest_dir: "/home/linuxbrew/.codex".to_string(),
        cache_root: PathBuf::from("/home/u/.cache/petrel"),
    }
}

fn spec(entry: EntryChoice) -> LaunchSpec {
    LaunchSpec {
        name: "codex-test".to_string(),
        image: ImageReference::new("codex", "0.39.0"),
        mounts: paths().mounts(),
        entry,
    }
}

fn run(entry: EntryChoice) -> (MemoryFs, MessageLog, String, Vec<String>) {
    let fs = MemoryFs::default();
    let launcher = CapturingLauncher::default();
    let reporter = MessageLog::default();

    let err = launch(&fs, &launcher, &reporter, "container", &spec(entry)).expect_err("no exec");
    assert!(matches!(err, LaunchError::LaunchFailed(_)));

    let (program, args) = launcher.invocation.borrow().clone().expect("invoked");
    (fs, reporter, program, args)
}

#[test]
fn tool_launch_ends_with_image_tool_and_passthrough_args() {
    let (_, _, program, args) = run(EntryChoice::Tool {
        path: "/home/linuxbrew/.linuxbrew/bin/codex".to_string(),
        args: vec!["exec".to_string(), "--model".to_string(), "o3".to_string()],
    });

    assert_eq!(program, "container");
    assert_eq!(&args[..5], ["run", "--name", "codex-test", "--rm", "-it"]);
    assert_eq!(
        &args[args.len() - 5..],
        [
            "codex:0.39.0",
            "/home/linuxbrew/.linuxbrew/bin/codex",
            "exec",
            "--model",
            "o3"
        ]
    );
}

#[test]
fn every_session_mount_is_passed_and_created() {
    let (fs, _, _, args) = run(EntryChoice::Shell);
    let cache_dir = PathBuf::from("/home/u/.cache/petrel").join(repo_cache_key(&paths().repo_dir));

    assert!(args.contains(&"/work/my repo:/home/linuxbrew/repo".to_string()));
    assert!(args.contains(&format!(
        "src={},dst=/home/linuxbrew/.codex",
        "/home/u/.codex-container"
    )));
    assert!(args.contains(&"src=/home/u/.cache/petrel/uv_cache,dst=/home/linuxbrew/.uv_cache".to_string()));
    assert!(args.contains(&format!(
        "src={},dst=/home/linuxbrew/repo/.venv",
        cache_dir.join(".venv").display()
    )));

    let created = fs.created.borrow();
    assert_eq!(created.len(), 4);
    assert!(created.contains(&PathBuf::from("/work/my repo")));
    assert!(created.contains(&cache_dir.join(".venv")));
}

#[test]
fn shell_launch_runs_bash() {
    let (_, _, _, args) = run(EntryChoice::Shell);
    assert_eq!(args.last().map(String::as_str), Some("/bin/bash"));
}

#[test]
fn executed_command_is_printed_shell_quoted() {
    let (_, reporter, _, _) = run(EntryChoice::Shell);
    let steps = reporter.steps.borrow();
    let line = steps.last().expect("printed");
    assert!(line.starts_with("Executing: container run --name codex-test --rm -it"));
    assert!(line.contains("'/work/my repo:/home/linuxbrew/repo'"));
}
