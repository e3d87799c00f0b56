//! End-to-end CLI integration tests.
//!
//! Each test builds a throwaway git repository, runs the `ticketlog`
//! binary against it and checks stdout and the exit code.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a temporary git repository with a configured identity.
fn setup_git_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);

    temp_dir
}

fn commit(dir: &Path, message: &str) {
    git(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
}

fn commit_file(dir: &Path, file: &str, message: &str) {
    fs::write(dir.join(file), message).expect("failed to write file");
    git(dir, &["add", file]);
    git(dir, &["commit", "--quiet", "-m", message]);
}

fn ticketlog() -> Command {
    let mut cmd = Command::cargo_bin("ticketlog").expect("binary not built");
    cmd.env_remove("TICKETLOG_REPO")
        .env_remove("TICKETLOG_SINCE")
        .env_remove("TICKETLOG_AUTHOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    ticketlog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--since"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--layout"));
}

#[test]
fn test_reports_issue_references() {
    let repo = setup_git_repo();
    commit(repo.path(), "Fix login, closes JIRA-7");
    commit(repo.path(), "Tidy docs for #12");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Current arguments: repo="))
        .stdout(predicate::str::contains("Commits (2):"))
        .stdout(predicate::str::contains("Author: Test User <test@example.com>"))
        .stdout(predicate::str::contains("Issues found:\n#12\nJIRA-7\n"));
}

#[test]
fn test_repeated_references_kept_unless_dedup() {
    let repo = setup_git_repo();
    commit(repo.path(), "Start OPS-3");
    commit(repo.path(), "Finish OPS-3");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues found:\nOPS-3\nOPS-3\n"));

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .arg("--dedup")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Issues found:\nOPS-3\n"));
}

#[test]
fn test_no_issues_is_success() {
    let repo = setup_git_repo();
    commit(repo.path(), "Plain change");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("----------------\nIssues found:\n"));
}

#[test]
fn test_colon_in_message_stays_in_message() {
    let repo = setup_git_repo();
    commit(repo.path(), "fix: handle timeout, see NET-9");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:\nfix: handle timeout, see NET-9\n"))
        .stdout(predicate::str::contains("Issues found:\nNET-9\n"));
}

#[test]
fn test_author_filter() {
    let repo = setup_git_repo();
    commit(repo.path(), "Mine: ABC-1");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .args(["--author", "Somebody Else"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commits (0):"))
        .stdout(predicate::str::ends_with("Issues found:\n"));
}

#[test]
fn test_max_count() {
    let repo = setup_git_repo();
    commit(repo.path(), "First A-1");
    commit(repo.path(), "Second B-2");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .args(["--max-count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commits (1):"))
        .stdout(predicate::str::ends_with("Issues found:\nB-2\n"));
}

#[test]
fn test_files_listed() {
    let repo = setup_git_repo();
    commit_file(repo.path(), "notes.txt", "Add notes for DOC-5");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .arg("--files")
        .assert()
        .success()
        .stdout(predicate::str::contains("    A\tnotes.txt\n"));
}

#[test]
fn test_default_layout() {
    let repo = setup_git_repo();
    commit(repo.path(), "Default layout run");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .args(["--layout", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw history:\ncommit "))
        .stdout(predicate::str::contains("Commits (1):"))
        // git's message block has no commit marker, so it is discarded
        .stdout(predicate::str::ends_with(
            "Messages:\n----------------\nIssues found:\n",
        ));
}

#[test]
fn test_verbose_shows_commit_ids() {
    let repo = setup_git_repo();
    commit(repo.path(), "Verbose QA-2");

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"QA-2  \([0-9a-f]{7}\)\n$").unwrap());
}

#[test]
fn test_without_repo_uses_current_dir() {
    let repo = setup_git_repo();
    commit(repo.path(), "Quick start QS-1");

    ticketlog()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ticketlog"))
        .stdout(predicate::str::contains("Verbose output enabled"))
        .stdout(predicate::str::contains("repo=."))
        .stdout(predicate::str::contains("QS-1  ("));
}

#[test]
fn test_empty_repo_flag_uses_current_dir() {
    let repo = setup_git_repo();
    commit(repo.path(), "Blank flag BF-1");

    ticketlog()
        .current_dir(repo.path())
        .args(["--repo", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbose output enabled"))
        .stdout(predicate::str::contains("repo=."))
        .stdout(predicate::str::contains("BF-1  ("));
}

#[test]
fn test_empty_repo_environment_uses_current_dir() {
    let repo = setup_git_repo();
    commit(repo.path(), "Blank env BE-2");

    ticketlog()
        .current_dir(repo.path())
        .env("TICKETLOG_REPO", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbose output enabled"))
        .stdout(predicate::str::contains("BE-2  ("));
}

#[test]
fn test_repo_from_config_file_skips_quick_start() {
    let repo = setup_git_repo();
    commit(repo.path(), "Configured CF-3");
    let config_dir = TempDir::new().unwrap();
    let config = config_dir.path().join("ticketlog.toml");
    fs::write(
        &config,
        format!("[fetch]\nrepo = '{}'\n", repo.path().display()),
    )
    .unwrap();

    ticketlog()
        .current_dir(config_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbose output enabled").not())
        .stdout(predicate::str::ends_with("Issues found:\nCF-3\n"))
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_repo_from_environment() {
    let repo = setup_git_repo();
    commit(repo.path(), "Env run ENV-4");

    ticketlog()
        .env("TICKETLOG_REPO", repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbose output enabled").not())
        .stdout(predicate::str::ends_with("Issues found:\nENV-4\n"));
}

#[test]
fn test_config_file_settings() {
    let repo = setup_git_repo();
    commit(repo.path(), "Tracker GH-10 and #3");
    fs::write(
        repo.path().join("ticketlog.toml"),
        "[extractor]\npatterns = ['GH-\\d+']\n",
    )
    .unwrap();

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Issues found:\nGH-10\n"));
}

#[test]
fn test_missing_repo_path_exits_2() {
    let temp_dir = TempDir::new().unwrap();

    ticketlog()
        .arg("--repo")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("repository path is not a directory"));
}

#[test]
fn test_not_a_git_repo_exits_1() {
    let temp_dir = TempDir::new().unwrap();

    ticketlog()
        .arg("--repo")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fetch failed"));
}

#[test]
fn test_invalid_pattern_exits_2() {
    let repo = setup_git_repo();
    commit(repo.path(), "Anything");
    let config = repo.path().join("bad.toml");
    fs::write(&config, "[extractor]\npatterns = ['(']\n").unwrap();

    ticketlog()
        .arg("--repo")
        .arg(repo.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2);
}

#[test]
fn test_invalid_config_exits_2() {
    let repo = setup_git_repo();
    fs::write(repo.path().join("ticketlog.toml"), "[fetch\n").unwrap();

    ticketlog().arg("--repo").arg(repo.path()).assert().code(2);
}

#[test]
fn test_invalid_arguments_exit_2() {
    ticketlog().args(["--max-count", "0"]).assert().code(2);
    ticketlog().args(["--layout", "oneline"]).assert().code(2);
    ticketlog().arg("--no-such-flag").assert().code(2);
}
