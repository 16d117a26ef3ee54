// crates/domain/src/analytics.rs
//! Cross-repository aggregation of [`RepoReport`]s.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sloc_census_shared_kernel::SlocCount;

use crate::{config::SummaryConfig, model::RepoReport};

/// A crate and the number of repositories depending on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateUsage {
    pub name: String,
    pub repos: usize,
}

/// Per-repository view used in the summary listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoHighlights {
    pub repo: String,
    pub primary_sloc: SlocCount,
    pub primary_ratio: f64,
    pub total_dependencies: usize,
    pub filtered_dependencies: usize,
    /// Non-infrastructure crates used by at most `unique_threshold` repositories.
    pub unique_crates: Vec<String>,
}

/// Organisation-wide summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgSummary {
    pub repositories: usize,
    /// The primary language most reports were scanned with.
    pub primary_language: String,
    /// Every primary language seen in the input, with its report count.
    /// More than one entry means the reports were scanned with different `--primary` values.
    #[serde(default)]
    pub primary_languages: Vec<(String, usize)>,
    pub primary_repositories: usize,
    pub unique_threshold: usize,
    pub files_per_language: Vec<(String, usize)>,
    pub repos_per_language: Vec<(String, usize)>,
    pub sloc_per_language: Vec<(String, usize)>,
    pub crate_usage: Vec<CrateUsage>,
    pub repos: Vec<RepoHighlights>,
}

impl OrgSummary {
    /// Aggregate `reports`.
    ///
    /// Language tallies include every report. Crate usage and highlights only
    /// include repositories with SLOC in their own primary language.
    /// Primary languages are grouped case-insensitively.
    pub fn from_reports(reports: &[RepoReport], config: &SummaryConfig) -> Self {
        let mut files: BTreeMap<&str, usize> = BTreeMap::new();
        let mut repos: BTreeMap<&str, usize> = BTreeMap::new();
        let mut sloc: BTreeMap<&str, usize> = BTreeMap::new();

        for report in reports {
            for totals in &report.languages {
                *files.entry(&totals.language).or_default() += totals.files.value();
                *repos.entry(&totals.language).or_default() += 1;
                *sloc.entry(&totals.language).or_default() += totals.sloc.value();
            }
        }

        let primary: Vec<&RepoReport> = reports.iter().filter(|r| !r.primary.sloc.is_zero()).collect();

        let mut usage: BTreeMap<&str, usize> = BTreeMap::new();
        for report in &primary {
            let unique: BTreeSet<&str> = report.dependencies.iter().map(String::as_str).collect();
            for dep in unique {
                *usage.entry(dep).or_default() += 1;
            }
        }

        let mut highlights: Vec<RepoHighlights> =
            primary.iter().map(|report| highlight(report, &usage, config)).collect();
        highlights.sort_by(|a, b| {
            b.primary_ratio.total_cmp(&a.primary_ratio).then_with(|| a.repo.cmp(&b.repo))
        });

        let mut crate_usage: Vec<CrateUsage> =
            usage.into_iter().map(|(name, repos)| CrateUsage { name: name.to_string(), repos }).collect();
        crate_usage.sort_by(|a, b| b.repos.cmp(&a.repos).then_with(|| a.name.cmp(&b.name)));

        let primary_languages = primary_language_tally(reports);
        let primary_language = primary_languages.first().map(|(name, _)| name.clone()).unwrap_or_default();

        Self {
            repositories: reports.len(),
            primary_language,
            primary_languages,
            primary_repositories: primary.len(),
            unique_threshold: config.unique_threshold,
            files_per_language: ranked(files),
            repos_per_language: ranked(repos),
            sloc_per_language: ranked(sloc),
            crate_usage,
            repos: highlights,
        }
    }

    /// True when the reports disagree on the primary language.
    pub fn has_mixed_primary(&self) -> bool {
        self.primary_languages.len() > 1
    }

    /// Share of primary-language repositories using `usage`'s crate.
    #[allow(clippy::cast_precision_loss)]
    pub fn usage_share(&self, usage: &CrateUsage) -> f64 {
        if self.primary_repositories == 0 {
            0.0
        } else {
            usage.repos as f64 / self.primary_repositories as f64
        }
    }
}

fn highlight(report: &RepoReport, usage: &BTreeMap<&str, usize>, config: &SummaryConfig) -> RepoHighlights {
    let deps: BTreeSet<&str> = report.dependencies.iter().map(String::as_str).collect();
    let filtered: Vec<&str> = deps.iter().copied().filter(|d| !config.is_ignored(d)).collect();
    let unique_crates = filtered
        .iter()
        .filter(|d| usage.get(*d).copied().unwrap_or_default() <= config.unique_threshold)
        .map(|d| (*d).to_string())
        .collect();

    RepoHighlights {
        repo: report.repo.clone(),
        primary_sloc: report.primary.sloc,
        primary_ratio: report.primary.sloc_ratio,
        total_dependencies: deps.len(),
        filtered_dependencies: filtered.len(),
        unique_crates,
    }
}

fn primary_language_tally(reports: &[RepoReport]) -> Vec<(String, usize)> {
    let mut tally: BTreeMap<String, (&str, usize)> = BTreeMap::new();
    for report in reports {
        let name = report.primary.language.as_str();
        tally.entry(name.to_ascii_lowercase()).or_insert((name, 0)).1 += 1;
    }
    ranked(tally.into_values().collect())
}

/// Sort by count (desc), then name (asc) for stable output.
fn ranked(map: BTreeMap<&str, usize>) -> Vec<(String, usize)> {
    let mut list: Vec<(String, usize)> = map.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    list
}
