// crates/ports/src/measurement.rs
use sloc_census_domain::model::FileSloc;
use sloc_census_shared_kernel::Result;

use crate::filesystem::SourceFile;

/// Port for measuring the SLOC of enumerated files.
///
/// Implementations return one [`FileSloc`] per input file, in input order.
pub trait SlocMeasurer: Send + Sync {
    fn measure(&self, files: &[SourceFile]) -> Result<Vec<FileSloc>>;
}
