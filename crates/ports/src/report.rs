// crates/ports/src/report.rs
use std::path::PathBuf;

use sloc_census_domain::model::RepoReport;
use sloc_census_shared_kernel::Result;

/// Port for persisting repository reports.
pub trait ReportSink: Send + Sync {
    /// Store `report` and return where it was written.
    fn store(&self, report: &RepoReport) -> Result<PathBuf>;
}

/// Port for loading previously written repository reports.
pub trait ReportSource: Send + Sync {
    /// Load every report found at `inputs` (files or directories).
    ///
    /// With `strict` unset, unparseable reports are skipped.
    fn load(&self, inputs: &[PathBuf], strict: bool) -> Result<Vec<RepoReport>>;
}
