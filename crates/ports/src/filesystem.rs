// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sloc_census_domain::config::ScanConfig;
use sloc_census_shared_kernel::Result;

/// DTO representing a file discovered under a repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the repository root.
    pub relative: PathBuf,
    /// Lower-case extension without the leading dot, empty when absent.
    pub ext: String,
}

impl SourceFile {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| path.clone());
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        Self { path, relative, ext }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Port for enumerating the files of one repository.
pub trait SourceEnumerator: Send + Sync {
    fn collect(&self, root: &Path, config: &ScanConfig) -> Result<Vec<SourceFile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_file_derives_relative_path_and_extension() {
        let file = SourceFile::new(Path::new("/repos/demo"), PathBuf::from("/repos/demo/src/Main.RS"));
        assert_eq!(file.relative, PathBuf::from("src/Main.RS"));
        assert_eq!(file.ext, "rs");
        assert_eq!(file.file_name(), Some("Main.RS"));
    }

    #[test]
    fn source_file_without_extension() {
        let file = SourceFile::new(Path::new("/repos/demo"), PathBuf::from("/repos/demo/Makefile"));
        assert!(file.ext.is_empty());
    }
}
