use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Workspace, cli};

fn scan_json(args: &[&str], repo: &std::path::Path) -> Value {
    let output = cli().arg("scan").args(["--format", "json"]).args(args).arg(repo).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn json_counts_code_lines_only() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    let json = scan_json(&[], &repo);
    let report = &json[0];

    assert_eq!(report["repo"], "acme-api");
    assert_eq!(report["total_files"], 3);
    assert_eq!(report["total_sloc"], 9);
    assert_eq!(report["languages"][0]["language"], "TOML");
    assert_eq!(report["languages"][1]["language"], "Rust");
    assert_eq!(report["languages"][1]["sloc"], 4);
    assert_eq!(report["primary"]["sloc"], 4);
    assert_eq!(report["dependencies"], serde_json::json!(["axum", "tokio"]));
    assert!(report.get("files").is_none());
}

#[test]
fn extension_filter_narrows_measured_files() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    let json = scan_json(&["--ext", "rs"], &repo);
    let report = &json[0];

    assert_eq!(report["total_files"], 1);
    assert_eq!(report["total_sloc"], 4);
    assert!((report["primary"]["sloc_ratio"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(report["dependencies"], serde_json::json!(["axum", "tokio"]));
}

#[test]
fn per_file_lists_measurements() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    let json = scan_json(&["--per-file"], &repo);
    let files = json[0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    let readme = files.iter().find(|f| f["path"] == "README.md").unwrap();
    assert!(readme["language"].is_null());
    assert_eq!(readme["sloc"], 0);
}

#[test]
fn csv_lists_languages() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    cli()
        .args(["scan", "--format", "csv"])
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("repo,language,files,sloc\n"))
        .stdout(predicate::str::contains("acme-api,Rust,1,4"))
        .stdout(predicate::str::contains("acme-api,TOML,1,5"));
}

#[test]
fn table_writes_to_output_file() {
    let ws = Workspace::new();
    let repo = ws.rust_repo();
    let out = ws.path().join("out/table.txt");
    cli().arg("scan").arg("--output").arg(&out).arg(&repo).assert().success().stdout("");

    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.starts_with("acme-api: 3 files, 9 SLOC, Rust 44.4% of SLOC"), "got: {text}");
}

#[test]
fn syntax_file_adds_languages() {
    let ws = Workspace::new();
    ws.write_file("zig-repo/main.zig", "// comment\nconst a = 1;\n\n");
    let syntax = ws.write_file("syntax.yaml", "- name: Zig\n  extensions: [zig]\n  line_comment: \"//\"\n  quotes: ['\"']\n");
    let json = scan_json(&["--syntax-file", syntax.to_str().unwrap(), "--primary", "Zig"], &ws.path().join("zig-repo"));
    assert_eq!(json[0]["languages"][0]["language"], "Zig");
    assert_eq!(json[0]["primary"]["sloc"], 1);
}
