// crates/infra/src/report_store.rs
use std::path::{Path, PathBuf};

use log::{debug, warn};
use sloc_census_domain::model::RepoReport;
use sloc_census_ports::report::{ReportSink, ReportSource};
use sloc_census_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Stores one pretty-printed `<repo>.json` per repository under a directory.
#[derive(Debug, Clone)]
pub struct JsonReportStore {
    out_dir: PathBuf,
}

impl JsonReportStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn path_for(&self, repo: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", file_stem(repo)))
    }
}

/// Repository names become file names; anything outside `[A-Za-z0-9._-]` is replaced.
fn file_stem(repo: &str) -> String {
    let stem: String = repo
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    if stem.is_empty() || stem.chars().all(|c| c == '.') { "_".to_string() } else { stem }
}

impl ReportSink for JsonReportStore {
    fn store(&self, report: &RepoReport) -> Result<PathBuf> {
        let path = self.path_for(&report.repo);
        let mut json = serde_json::to_vec_pretty(report)?;
        json.push(b'\n');
        FileWriter::atomic_write(&path, &json)
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}

/// Reads report JSON files, expanding directories to their `*.json` entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportSource;

impl JsonReportSource {
    pub fn new() -> Self {
        Self
    }

    fn expand(input: &Path) -> Result<Vec<PathBuf>> {
        if !input.is_dir() {
            return Ok(vec![input.to_path_buf()]);
        }
        let entries = std::fs::read_dir(input).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "read_dir".to_string(),
            path: input.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")))
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn read(path: &Path) -> Result<RepoReport> {
        let text = FileReader::read_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        serde_json::from_str::<RepoReport>(&text).with_context(|| format!("report {}", path.display()))
    }
}

impl ReportSource for JsonReportSource {
    fn load(&self, inputs: &[PathBuf], strict: bool) -> Result<Vec<RepoReport>> {
        let mut reports = Vec::new();
        for input in inputs {
            for path in Self::expand(input)? {
                match Self::read(&path) {
                    Ok(report) => reports.push(report),
                    Err(err) if strict => return Err(err),
                    Err(err) => warn!("skipping {err}"),
                }
            }
        }
        Ok(reports)
    }
}
