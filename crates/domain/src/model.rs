// crates/domain/src/model.rs
use std::{collections::BTreeMap, path::PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sloc_census_shared_kernel::{FileCount, SlocCount};

/// Measurement of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSloc {
    pub path: PathBuf,
    /// `None` when no known language handles the file's extension.
    pub language: Option<String>,
    pub sloc: SlocCount,
    /// `false` when the file could not be read; its SLOC is then zero.
    #[serde(default = "default_true")]
    pub readable: bool,
}

const fn default_true() -> bool {
    true
}

impl FileSloc {
    pub fn new(path: impl Into<PathBuf>, language: Option<String>, sloc: SlocCount) -> Self {
        Self { path: path.into(), language, sloc, readable: true }
    }

    pub fn unreadable(path: impl Into<PathBuf>, language: Option<String>) -> Self {
        Self { path: path.into(), language, sloc: SlocCount::ZERO, readable: false }
    }
}

/// Per-language totals within one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTotals {
    pub language: String,
    pub files: FileCount,
    pub sloc: SlocCount,
}

/// How much of a repository is written in the primary language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryShare {
    pub language: String,
    pub files: FileCount,
    pub file_ratio: f64,
    pub sloc: SlocCount,
    pub sloc_ratio: f64,
}

/// Result of analysing one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoReport {
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned_at: Option<DateTime<Local>>,
    pub total_files: FileCount,
    #[serde(default)]
    pub unreadable_files: FileCount,
    pub total_sloc: SlocCount,
    pub languages: Vec<LanguageTotals>,
    pub primary: PrimaryShare,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSloc>,
}

impl RepoReport {
    /// Build a report from per-file measurements.
    ///
    /// Every file counts toward `total_files`; only files with a known language
    /// contribute SLOC and language totals.
    pub fn from_files(repo: impl Into<String>, files: &[FileSloc], primary_language: &str) -> Self {
        let mut by_language: BTreeMap<&str, (FileCount, SlocCount)> = BTreeMap::new();
        let mut total_sloc = SlocCount::ZERO;
        let mut unreadable = FileCount::ZERO;

        for file in files {
            if !file.readable {
                unreadable += 1;
            }
            if let Some(language) = file.language.as_deref() {
                let entry = by_language.entry(language).or_default();
                entry.0 += 1;
                entry.1 += file.sloc;
                total_sloc += file.sloc;
            }
        }

        let mut languages: Vec<LanguageTotals> = by_language
            .into_iter()
            .map(|(language, (files, sloc))| LanguageTotals { language: language.to_string(), files, sloc })
            .collect();
        languages.sort_by(|a, b| b.sloc.cmp(&a.sloc).then_with(|| a.language.cmp(&b.language)));

        let total_files = FileCount::new(files.len());
        let (primary_files, primary_sloc) = languages
            .iter()
            .find(|t| t.language.eq_ignore_ascii_case(primary_language))
            .map_or((FileCount::ZERO, SlocCount::ZERO), |t| (t.files, t.sloc));

        Self {
            repo: repo.into(),
            scanned_at: None,
            total_files,
            unreadable_files: unreadable,
            total_sloc,
            languages,
            primary: PrimaryShare {
                language: primary_language.to_string(),
                files: primary_files,
                file_ratio: primary_files.ratio_of(total_files),
                sloc: primary_sloc,
                sloc_ratio: primary_sloc.ratio_of(total_sloc),
            },
            dependencies: Vec::new(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<FileSloc>) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub fn scanned_at(mut self, at: DateTime<Local>) -> Self {
        self.scanned_at = Some(at);
        self
    }

    /// Names of languages present in the repository.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|t| t.language.as_str())
    }
}
