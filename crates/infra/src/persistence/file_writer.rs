// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        File::create(path).map(BufWriter::new)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        Self::atomic_write_with(path, |writer| writer.write_all(data))
    }

    /// Like [`FileWriter::atomic_write`], but lets `fill` stream the content.
    ///
    /// The temp file is removed on every failure after it was created, so a
    /// failed write never leaves `.tmp` files next to `path`.
    pub fn atomic_write_with<P, F>(path: P, fill: F) -> std::io::Result<()>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = Self::write_temp(&tmp, fill).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn write_temp<F>(tmp: &Path, fill: F) -> std::io::Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let mut writer = BufWriter::new(File::create(tmp)?);
        fill(&mut writer)?;
        writer.flush()?;
        let _ = writer.get_ref().sync_all();
        Ok(())
    }
}
