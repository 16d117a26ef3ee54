// crates/infra/src/measurement/measurer.rs
//! ファイル単位の SLOC 計測

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::{debug, warn};
use sloc_census_domain::{config::ScanConfig, language::LanguageRegistry, model::FileSloc};
use sloc_census_ports::{filesystem::SourceFile, measurement::SlocMeasurer};
use sloc_census_shared_kernel::{InfrastructureError, Result, SlocCount};

use crate::{measurement::strategies::count_code_lines, persistence::FileReader};

/// Files below this count are measured on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 10;

/// `SlocMeasurer` adapter reading files from disk and scanning them with the
/// syntax of their language.
#[derive(Debug, Clone)]
pub struct FileMeasurer {
    registry: LanguageRegistry,
    jobs: usize,
    strict: bool,
}

impl FileMeasurer {
    pub fn new(registry: LanguageRegistry, jobs: usize, strict: bool) -> Self {
        Self { registry, jobs: jobs.max(1), strict }
    }

    pub fn from_config(registry: LanguageRegistry, config: &ScanConfig) -> Self {
        Self::new(registry, config.jobs, config.strict)
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Measure one file.
    ///
    /// Files without a known language are not read and report zero SLOC.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::FileRead` when the file cannot be read.
    pub fn measure_file(&self, file: &SourceFile) -> Result<FileSloc> {
        let Some(language) = self.registry.by_extension(&file.ext) else {
            return Ok(FileSloc::new(file.relative.clone(), None, SlocCount::ZERO));
        };

        let bytes = FileReader::read_to_end(&file.path)
            .map_err(|source| InfrastructureError::FileRead { path: file.path.clone(), source })?;
        let text = String::from_utf8_lossy(&bytes);
        let sloc = SlocCount::new(count_code_lines(&text, &language.syntax));

        Ok(FileSloc::new(file.relative.clone(), Some(language.name.clone()), sloc))
    }

    /// Measure, downgrading read failures to unreadable entries unless strict.
    fn measure_or_skip(&self, file: &SourceFile) -> Result<FileSloc> {
        match self.measure_file(file) {
            Ok(sloc) => Ok(sloc),
            Err(err) if self.strict => Err(err),
            Err(err) => {
                warn!("{err}");
                let language = self.registry.by_extension(&file.ext).map(|l| l.name.clone());
                Ok(FileSloc::unreadable(file.relative.clone(), language))
            }
        }
    }

    fn measure_sequential(&self, files: &[SourceFile]) -> Result<Vec<FileSloc>> {
        files.iter().map(|file| self.measure_or_skip(file)).collect()
    }

    #[cfg(feature = "parallel")]
    fn measure_parallel(&self, files: &[SourceFile]) -> Result<Vec<FileSloc>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        // collect は入力順を保持する
        pool.install(|| files.par_iter().map(|file| self.measure_or_skip(file)).collect())
    }
}

impl SlocMeasurer for FileMeasurer {
    #[cfg(feature = "parallel")]
    fn measure(&self, files: &[SourceFile]) -> Result<Vec<FileSloc>> {
        if files.len() < PARALLEL_THRESHOLD || self.jobs == 1 {
            return self.measure_sequential(files);
        }
        debug!("measuring {} files on {} threads", files.len(), self.jobs);
        self.measure_parallel(files)
    }

    #[cfg(not(feature = "parallel"))]
    fn measure(&self, files: &[SourceFile]) -> Result<Vec<FileSloc>> {
        debug!("measuring {} files sequentially", files.len());
        self.measure_sequential(files)
    }
}
