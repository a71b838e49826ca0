//! Integration tests for the stage-guard CLI
//!
//! Repositories are created with git2 and the libgit2 backend is selected
//! through the environment, so no git binary is needed.

use assert_cmd::Command;
use git2::{IndexAddOption, Repository};
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

const BLOCKED_HEADER: &str = "[pre-commit] The following staged files are blocked:";

/// stage-guard running in `dir` with an isolated environment
fn stage_guard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stage-guard").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("STAGE_GUARD_GIT__BACKEND", "libgit2")
        .env("STAGE_GUARD_OUTPUT__COLOR", "false")
        .env_remove("STAGE_GUARD_GIT__BINARY")
        .env_remove("STAGE_GUARD_OUTPUT__FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    (dir, repo)
}

fn write_file(root: &Path, name: &str, len: u64) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(&path).unwrap().set_len(len).unwrap();
}

fn stage_all(repo: &Repository) {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("stage-guard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("stage-guard")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stage-guard"));
}

#[test]
fn test_invalid_subcommand() {
    Command::cargo_bin("stage-guard")
        .unwrap()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_nothing_staged_allows_commit() {
    let (dir, _repo) = init_repo();

    stage_guard(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_node_modules_path_blocks_commit() {
    let (dir, repo) = init_repo();
    write_file(dir.path(), "node_modules/pkg/index.js", 50);
    write_file(dir.path(), "src/app.js", 1);
    stage_all(&repo);

    stage_guard(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(BLOCKED_HEADER))
        .stderr(predicate::str::contains(
            " - node_modules/pkg/index.js: Committed path is inside node_modules",
        ))
        .stderr(predicate::str::contains("src/app.js").not())
        .stderr(predicate::str::contains("git restore --staged <file>"));
}

#[test]
fn test_oversized_file_blocks_commit() {
    let (dir, repo) = init_repo();
    write_file(dir.path(), "big.bin", 11_534_336);
    stage_all(&repo);

    stage_guard(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            " - big.bin: File size 11 MB exceeds 10 MB",
        ));
}

#[test]
fn test_file_removed_after_staging_is_skipped() {
    let (dir, repo) = init_repo();
    write_file(dir.path(), "big.bin", 11_534_336);
    stage_all(&repo);
    fs::remove_file(dir.path().join("big.bin")).unwrap();

    stage_guard(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_outside_repository_fails_open() {
    let dir = TempDir::new().unwrap();
    if Repository::discover(dir.path()).is_ok() {
        return;
    }

    stage_guard(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "failed to list staged files, skipping size checks",
        ))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_missing_git_binary_fails_open() {
    let (dir, repo) = init_repo();
    write_file(dir.path(), "node_modules/pkg/index.js", 50);
    stage_all(&repo);

    stage_guard(dir.path())
        .env("STAGE_GUARD_GIT__BACKEND", "cli")
        .env("STAGE_GUARD_GIT__BINARY", "stage-guard-test-no-such-git")
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to list staged files"));
}

#[test]
fn test_broken_config_fails_open() {
    let (dir, repo) = init_repo();
    fs::write(dir.path().join("broken.toml"), "[output]\ncolor = \"maybe\"\n").unwrap();
    write_file(dir.path(), "node_modules/pkg/index.js", 50);
    stage_all(&repo);

    // The environment still selects the libgit2 backend after the fallback
    stage_guard(dir.path())
        .args(["--config", "broken.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to load configuration, using defaults",
        ))
        .stderr(predicate::str::contains(
            " - node_modules/pkg/index.js: Committed path is inside node_modules",
        ));
}

#[test]
fn test_cli_backend_blocks_oversized_non_ascii_name() {
    if which::which("git").is_err() {
        return;
    }
    let (dir, repo) = init_repo();
    write_file(dir.path(), "vidéo.bin", 11_534_336);
    stage_all(&repo);

    stage_guard(dir.path())
        .env("STAGE_GUARD_GIT__BACKEND", "cli")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            " - vidéo.bin: File size 11 MB exceeds 10 MB",
        ));
}

#[test]
fn test_json_report() {
    let (dir, repo) = init_repo();
    write_file(dir.path(), "node_modules/pkg/index.js", 50);
    stage_all(&repo);

    let assert = stage_guard(dir.path())
        .args(["check", "--format", "json"])
        .assert()
        .code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stderr).unwrap();
    assert_eq!(report["blocked"], true);
    assert_eq!(report["violations"][0]["path"], "node_modules/pkg/index.js");
    assert_eq!(report["violations"][0]["reason"]["kind"], "excluded_directory");
}

#[test]
fn test_install_and_uninstall_hook() {
    let (dir, _repo) = init_repo();
    let hook = dir.path().join(".git/hooks/pre-commit");

    stage_guard(dir.path())
        .arg("install")
        .assert()
        .success()
        .stderr(predicate::str::contains("Installed pre-commit hook"));

    let script = fs::read_to_string(&hook).unwrap();
    assert!(script.contains("exec stage-guard check"));

    stage_guard(dir.path()).arg("uninstall").assert().success();
    assert!(!hook.exists());
}

#[test]
fn test_install_refuses_foreign_hook_without_force() {
    let (dir, _repo) = init_repo();
    let hook = dir.path().join(".git/hooks/pre-commit");
    fs::create_dir_all(hook.parent().unwrap()).unwrap();
    fs::write(&hook, "#!/bin/sh\nnpx lint-staged\n").unwrap();

    stage_guard(dir.path())
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    stage_guard(dir.path())
        .arg("uninstall")
        .assert()
        .success()
        .stderr(predicate::str::contains("not installed by stage-guard"));
    assert!(hook.exists());

    stage_guard(dir.path())
        .args(["install", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&hook).unwrap().contains("stage-guard check"));
}

#[test]
fn test_config_show_reflects_environment() {
    let (dir, _repo) = init_repo();

    stage_guard(dir.path())
        .args(["config", "show", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend: libgit2"));
}
