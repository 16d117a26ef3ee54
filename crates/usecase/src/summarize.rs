// crates/usecase/src/summarize.rs
use std::path::PathBuf;

use log::{info, warn};
use sloc_census_domain::{analytics::OrgSummary, config::SummaryConfig};
use sloc_census_ports::report::ReportSource;
use sloc_census_shared_kernel::{ApplicationError, Result};

/// Aggregate stored repository reports into an [`OrgSummary`].
pub struct SummarizeReports<'a> {
    source: &'a dyn ReportSource,
}

impl<'a> SummarizeReports<'a> {
    pub fn new(source: &'a dyn ReportSource) -> Self {
        Self { source }
    }

    pub fn run(&self, inputs: &[PathBuf], config: &SummaryConfig) -> Result<OrgSummary> {
        let reports = self.source.load(inputs, config.strict)?;
        if reports.is_empty() {
            return Err(ApplicationError::NoReports.into());
        }
        info!("summarizing {} repository reports", reports.len());
        let summary = OrgSummary::from_reports(&reports, config);
        if summary.has_mixed_primary() {
            let seen: Vec<String> =
                summary.primary_languages.iter().map(|(name, count)| format!("{name} ({count})")).collect();
            warn!(
                "reports were scanned with different primary languages: {}; crate usage mixes them",
                seen.join(", ")
            );
        }
        Ok(summary)
    }
}
