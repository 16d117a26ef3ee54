// crates/domain/src/config.rs
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use globset::{Glob, GlobSet, GlobSetBuilder};
use sloc_census_shared_kernel::{DomainError, DomainResult};

/// Directories skipped during enumeration unless `no_default_prune` is set.
pub const DEFAULT_PRUNED_DIRS: &[&str] =
    &[".git", "target", "node_modules", "vendor", "dist", "build", ".venv", "__pycache__"];

/// Infrastructure crates that say little about what a repository does.
pub const DEFAULT_IGNORED_CRATES: &[&str] = &[
    // async runtimes
    "tokio",
    "async-std",
    "async-trait",
    "futures",
    // serialization
    "serde",
    "serde_json",
    "serde_derive",
    // error handling
    "anyhow",
    "thiserror",
    // logging
    "log",
    "env_logger",
    "tracing",
    // environment
    "dotenv",
    "dotenvy",
    "dotenv_codegen",
    // common utilities
    "chrono",
    "uuid",
    "regex",
    "lazy_static",
    "once_cell",
    // http basics
    "http",
    "http-body-util",
    // encoding
    "base64",
    "urlencoding",
    "config",
];

pub const DEFAULT_PRIMARY_LANGUAGE: &str = "Rust";
pub const DEFAULT_UNIQUE_THRESHOLD: usize = 2;

/// Compiled set of directory globs excluded from enumeration.
#[derive(Debug, Clone)]
pub struct ExcludeDirs {
    patterns: Vec<String>,
    set: GlobSet,
}

impl Default for ExcludeDirs {
    fn default() -> Self {
        Self { patterns: Vec::new(), set: GlobSet::empty() }
    }
}

impl ExcludeDirs {
    /// Compile `patterns` into a matcher.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPattern` for a pattern that is not a valid glob.
    pub fn new<I, S>(patterns: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = Glob::new(pattern).map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.clone(),
                details: e.to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| DomainError::InvalidPattern {
            pattern: patterns.join(","),
            details: e.to_string(),
        })?;
        Ok(Self { patterns, set })
    }

    /// A directory is excluded when either its name or its path matches.
    pub fn matches(&self, dir: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        dir.file_name().is_some_and(|name| self.set.is_match(name)) || self.set.is_match(dir)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Resolved options for scanning repositories.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub roots: Vec<PathBuf>,
    pub hidden: bool,
    pub follow: bool,
    pub no_default_prune: bool,
    pub exclude_dirs: ExcludeDirs,
    /// Lower-case extensions without the leading dot; empty means every file.
    pub ext_filters: Vec<String>,
    pub jobs: usize,
    pub primary_language: String,
    pub per_file: bool,
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            hidden: false,
            follow: false,
            no_default_prune: false,
            exclude_dirs: ExcludeDirs::default(),
            ext_filters: Vec::new(),
            jobs: 1,
            primary_language: DEFAULT_PRIMARY_LANGUAGE.to_string(),
            per_file: false,
            strict: false,
        }
    }
}

impl ScanConfig {
    /// # Errors
    ///
    /// Returns a `DomainError` when no root is given, `jobs` is out of range, or the
    /// primary language is blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.roots.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "at least one repository path is required".into() });
        }
        if !(1..=512).contains(&self.jobs) {
            return Err(DomainError::RangeValidation { field: "jobs".into(), min: "1".into(), max: "512".into() });
        }
        if self.primary_language.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "primary language must not be empty".into() });
        }
        Ok(())
    }

    /// Whether a file with extension `ext` passes the extension filter.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.ext_filters.is_empty() || self.ext_filters.iter().any(|f| f.eq_ignore_ascii_case(ext))
    }

    /// Whether the walker should descend into `dir`.
    pub fn allows_dir(&self, dir: &Path) -> bool {
        if self.exclude_dirs.matches(dir) {
            return false;
        }
        if self.no_default_prune {
            return true;
        }
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| !DEFAULT_PRUNED_DIRS.contains(&name))
    }
}

/// Resolved options for aggregating repository reports.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub ignored_crates: BTreeSet<String>,
    /// Crates used in at most this many repositories are reported as unique.
    pub unique_threshold: usize,
    pub strict: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ignored_crates: DEFAULT_IGNORED_CRATES.iter().map(|c| (*c).to_string()).collect(),
            unique_threshold: DEFAULT_UNIQUE_THRESHOLD,
            strict: false,
        }
    }
}

impl SummaryConfig {
    pub fn is_ignored(&self, krate: &str) -> bool {
        self.ignored_crates.contains(krate)
    }
}
