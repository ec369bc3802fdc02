//! Binary-level tests for configuration errors
//!
//! Every scenario here fails its precondition checks, so the binary exits
//! non-zero without ever invoking git. Hosting-platform environment
//! variables are stripped so the tests are independent of the CI they run
//! in.

use std::process::{Command, Output};

use tempfile::TempDir;

fn wharf(workspace: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wharf"))
        .args(args)
        .arg("--workspace")
        .arg(workspace.path())
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_SHA")
        .current_dir(workspace.path())
        .output()
        .expect("failed to run the wharf binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn absolute_folder_is_rejected() {
    let workspace = TempDir::new().unwrap();

    let output = wharf(
        &workspace,
        &[
            "deploy",
            "--folder",
            "/build",
            "--repository",
            "octo/site",
            "--token",
            "tok",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must not be an absolute path"));
}

#[test]
fn dot_slash_folder_is_rejected() {
    let workspace = TempDir::new().unwrap();

    let output = wharf(
        &workspace,
        &[
            "deploy",
            "--folder",
            "./build",
            "--repository",
            "octo/site",
            "--token",
            "tok",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must not start with './'"));
}

#[test]
fn missing_credentials_are_rejected() {
    let workspace = TempDir::new().unwrap();

    let output = wharf(
        &workspace,
        &["deploy", "--folder", "build", "--repository", "octo/site"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no deployment token was supplied"));
}

#[test]
fn json_mode_streams_the_failure_as_ndjson() {
    let workspace = TempDir::new().unwrap();

    let output = wharf(
        &workspace,
        &[
            "--json",
            "deploy",
            "--folder",
            "/build",
            "--repository",
            "octo/site",
            "--token",
            "tok",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut saw_failed = false;
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        let value: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("invalid JSON line: {} - {}", line, e));
        if value["event"] == "failed" {
            saw_failed = true;
        }
    }
    assert!(saw_failed, "expected a failed event in: {}", stdout);
}
