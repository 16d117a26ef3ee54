// crates/infra/src/filesystem.rs
use std::path::Path;

use ignore::WalkBuilder;
use log::{debug, warn};
use sloc_census_domain::config::ScanConfig;
use sloc_census_ports::filesystem::{SourceEnumerator, SourceFile};
use sloc_census_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `SourceEnumerator` port with `ignore`.
///
/// `.gitignore` rules are honored inside git checkouts. Heavy build and VCS
/// directories are pruned according to [`ScanConfig::allows_dir`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkEnumerator;

impl WalkEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl SourceEnumerator for WalkEnumerator {
    fn collect(&self, root: &Path, config: &ScanConfig) -> Result<Vec<SourceFile>> {
        walk_root(root, config)
    }
}

fn walk_root(root: &Path, config: &ScanConfig) -> Result<Vec<SourceFile>> {
    let metadata = std::fs::metadata(root).map_err(|source| InfrastructureError::FileSystemOperation {
        operation: "stat".to_string(),
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::WalkFailed {
            root: root.to_path_buf(),
            details: "not a directory".to_string(),
        }
        .into());
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .follow_links(config.follow)
        .hidden(!config.hidden)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .ignore(true);

    let dir_filter = config.clone();
    builder.filter_entry(move |entry| {
        // ルート自体は名前に関わらず走査する
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !is_dir || dir_filter.allows_dir(entry.path())
    });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("walk error under {}: {err}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        files.push(SourceFile::new(root, entry.into_path()));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);
    debug!("{} files under {}", files.len(), root.display());
    Ok(files)
}
