//! Binary-level CLI tests
//!
//! These exercise argument parsing and the credential chain without any
//! network traffic: every command here fails before a request is made.
//! stdin is closed under the test harness, so the interactive prompt
//! never triggers.

use assert_cmd::Command;
use predicates::prelude::*;

fn gitai() -> Command {
    Command::cargo_bin("gitai").unwrap()
}

#[test]
fn no_subcommand_prints_usage() {
    gitai()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn malformed_repo_path_is_rejected_before_any_request() {
    gitai()
        .args(["repo", "not-a-path"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("OWNER/NAME"));
}

#[test]
fn missing_credential_fails_with_guidance() {
    gitai()
        .env_remove("GITHUB_TOKEN")
        .args(["branches", "octocat/hello-world"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No GitHub token provided"));
}

#[test]
fn empty_env_token_is_treated_as_absent() {
    gitai()
        .env("GITHUB_TOKEN", "")
        .args(["issues", "octocat/hello-world"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn commit_limit_out_of_range_is_rejected() {
    gitai()
        .args(["commits", "octocat/hello-world", "--limit", "0"])
        .assert()
        .failure()
        .code(2);

    gitai()
        .args(["commits", "octocat/hello-world", "--limit", "200"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_issue_state_is_rejected() {
    gitai()
        .args(["issues", "octocat/hello-world", "--state", "weird"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn empty_issue_title_is_an_argument_error() {
    gitai()
        .env("GITHUB_TOKEN", "ghp_dummy")
        .args(["create-issue", "octocat/hello-world", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("title cannot be empty"));
}

#[test]
fn empty_repo_name_is_an_argument_error() {
    gitai()
        .env("GITHUB_TOKEN", "ghp_dummy")
        .args(["create", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn help_lists_all_commands() {
    let commands = [
        "auth",
        "repos",
        "repo",
        "create",
        "branches",
        "commits",
        "issues",
        "create-issue",
    ];

    let assert = gitai().arg("--help").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for command in commands {
        assert!(output.contains(command), "help is missing '{}'", command);
    }
}
