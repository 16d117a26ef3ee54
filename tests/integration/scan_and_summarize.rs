use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Workspace, cli};

fn scan_into(ws: &Workspace, out_dir: &std::path::Path) {
    let repo = ws.rust_repo();
    ws.write_file("acme-bot/src/lib.rs", "pub fn run() {}\n");
    ws.write_file("acme-bot/Cargo.toml", "[dependencies]\nserenity = \"0.12\"\ntokio = \"1\"\n");
    ws.write_file("site/index.ts", "export const x = 1;\n");

    cli()
        .arg("scan")
        .arg("--out-dir")
        .arg(out_dir)
        .arg(&repo)
        .arg(ws.path().join("acme-bot"))
        .arg(ws.path().join("site"))
        .assert()
        .success();
}

#[test]
fn out_dir_writes_one_report_per_repository() {
    let ws = Workspace::new();
    let out_dir = ws.path().join("reports");
    scan_into(&ws, &out_dir);

    for name in ["acme-api", "acme-bot", "site"] {
        let text = std::fs::read_to_string(out_dir.join(format!("{name}.json"))).unwrap();
        let report: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["repo"], name);
        assert!(report["scanned_at"].is_string());
    }
}

#[test]
fn summarize_reads_report_directory() {
    let ws = Workspace::new();
    let out_dir = ws.path().join("reports");
    scan_into(&ws, &out_dir);

    let output = cli().args(["summarize", "--format", "json"]).arg(&out_dir).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(summary["repositories"], 3);
    assert_eq!(summary["primary_repositories"], 2);
    assert_eq!(summary["crate_usage"][0]["name"], "tokio");
    assert_eq!(summary["crate_usage"][0]["repos"], 2);
    let api = summary["repos"].as_array().unwrap().iter().find(|r| r["repo"] == "acme-api").unwrap();
    assert_eq!(api["unique_crates"], serde_json::json!(["axum"]));
}

#[test]
fn summarize_skips_broken_reports_unless_strict() {
    let ws = Workspace::new();
    let out_dir = ws.path().join("reports");
    scan_into(&ws, &out_dir);
    ws.write_file("reports/broken.json", "{ not json");

    cli()
        .args(["summarize", "--format", "csv"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("crate_usage,tokio,2"));

    cli().args(["summarize", "--strict"]).arg(&out_dir).assert().failure();
}
