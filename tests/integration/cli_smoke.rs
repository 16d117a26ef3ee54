use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{Workspace, cli};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_sloc_census"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("summarize"));
}

#[test]
fn missing_repository_fails() {
    let ws = Workspace::new();
    cli()
        .args(["scan"])
        .arg(ws.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn rejects_invalid_jobs() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    cli().args(["scan", "--jobs", "0"]).arg(&repo).assert().failure();
}

#[test]
fn summarize_without_reports_fails() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.path().join("empty")).unwrap();
    cli()
        .arg("summarize")
        .arg(ws.path().join("empty"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("report"));
}
