// crates/usecase/src/analyze.rs
use std::path::Path;

use chrono::Local;
use log::info;
use sloc_census_domain::{config::ScanConfig, model::RepoReport};
use sloc_census_ports::{
    filesystem::{SourceEnumerator, SourceFile},
    manifest::ManifestReader,
    measurement::SlocMeasurer,
    report::ReportSink,
};
use sloc_census_shared_kernel::{ApplicationError, Result};

/// Enumerate, measure and describe repositories.
pub struct AnalyzeRepository<'a> {
    enumerator: &'a dyn SourceEnumerator,
    measurer: &'a dyn SlocMeasurer,
    manifests: &'a dyn ManifestReader,
    sink: Option<&'a dyn ReportSink>,
}

impl<'a> AnalyzeRepository<'a> {
    pub fn new(
        enumerator: &'a dyn SourceEnumerator,
        measurer: &'a dyn SlocMeasurer,
        manifests: &'a dyn ManifestReader,
    ) -> Self {
        Self { enumerator, measurer, manifests, sink: None }
    }

    /// Persist every report produced by [`Self::run_all`].
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn ReportSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Analyze a single repository rooted at `root`.
    ///
    /// Manifests are looked up among all enumerated files; the extension
    /// filter only narrows the files that are measured and reported.
    pub fn run(&self, root: &Path, config: &ScanConfig) -> Result<RepoReport> {
        let repo = repo_name(root);
        let all = self.enumerator.collect(root, config).map_err(|e| ApplicationError::FileCollectionFailed {
            reason: root.display().to_string(),
            source: Some(Box::new(e)),
        })?;
        let dependencies = self.manifests.dependencies(&all)?;

        let files: Vec<SourceFile> = all.into_iter().filter(|f| config.accepts_extension(&f.ext)).collect();
        let measured = self.measurer.measure(&files).map_err(|e| ApplicationError::MeasurementFailed {
            repo: repo.clone(),
            reason: "file measurement aborted".to_string(),
            source: Some(Box::new(e)),
        })?;

        let mut report = RepoReport::from_files(repo, &measured, &config.primary_language)
            .with_dependencies(dependencies)
            .scanned_at(Local::now());
        if config.per_file {
            report = report.with_files(measured);
        }

        info!(
            "{}: {} files, {} SLOC, {} {:.1}%",
            report.repo,
            report.total_files,
            report.total_sloc,
            report.primary.language,
            report.primary.sloc_ratio * 100.0
        );
        Ok(report)
    }

    /// Analyze every root in `config`, storing each report when a sink is set.
    pub fn run_all(&self, config: &ScanConfig) -> Result<Vec<RepoReport>> {
        config.validate()?;
        let mut reports = Vec::with_capacity(config.roots.len());
        for root in &config.roots {
            let report = self.run(root, config)?;
            if let Some(sink) = self.sink {
                let path = sink.store(&report)?;
                info!("report written to {}", path.display());
            }
            reports.push(report);
        }
        Ok(reports)
    }
}

/// Last path component of `root`, resolving `.` and `..` through the filesystem.
fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            std::fs::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}
