// crates/ports/src/manifest.rs
use sloc_census_shared_kernel::Result;

use crate::filesystem::SourceFile;

/// Port for extracting declared dependencies from a repository's manifests.
pub trait ManifestReader: Send + Sync {
    /// Sorted, deduplicated dependency names found among `files`.
    fn dependencies(&self, files: &[SourceFile]) -> Result<Vec<String>>;
}
