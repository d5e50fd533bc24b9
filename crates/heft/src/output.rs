//! Output directory handling and artifact persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::measure::Measurement;

/// The directory a run writes its artifacts and `stats.csv` into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty the directory, creating it if needed.
    ///
    /// Called once per run before anything is written, so no file from an
    /// earlier run survives into the new results.
    ///
    /// # Errors
    ///
    /// Fails if the path exists but is not a directory, or on any I/O error.
    pub fn prepare(&self) -> Result<()> {
        let dir = &self.path;
        if dir.exists() {
            if !dir.is_dir() {
                return Err(Error::output(
                    dir,
                    io::Error::new(
                        io::ErrorKind::NotADirectory,
                        "output path exists but is not a directory",
                    ),
                ));
            }

            // Remove all contents but keep the directory itself
            let entries = fs::read_dir(dir).map_err(|e| Error::output(dir, e))?;
            for entry in entries {
                let path = entry.map_err(|e| Error::output(dir, e))?.path();
                let removed = if path.is_dir() {
                    fs::remove_dir_all(&path)
                } else {
                    fs::remove_file(&path)
                };
                removed.map_err(|e| Error::output(&path, e))?;
            }
        } else {
            fs::create_dir_all(dir).map_err(|e| Error::output(dir, e))?;
        }

        debug!(dir = %dir.display(), "prepared output directory");
        Ok(())
    }

    /// Write `contents` to `file_name` inside the directory.
    pub fn write(&self, file_name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path.join(file_name);
        fs::write(&path, contents).map_err(|e| Error::output(&path, e))?;
        Ok(path)
    }

    /// Persist the four artifacts of one measurement:
    /// `<name>.js`, `<name>.min.js`, `<name>.min.js.gz`, `<name>.min.js.brotli`.
    pub fn write_artifacts(&self, name: &str, code: &str, measurement: &Measurement) -> Result<()> {
        self.write(&format!("{name}.js"), code)?;
        self.write(&format!("{name}.min.js"), &measurement.minified)?;
        self.write(&format!("{name}.min.js.gz"), &measurement.gzip)?;
        self.write(&format!("{name}.min.js.brotli"), &measurement.brotli)?;
        Ok(())
    }
}
