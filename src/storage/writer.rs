//! Log file writer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::capture::LogEntry;
use crate::config::CaptureConfig;
use crate::{Result, TapwireError};

/// Writer for the captured-session log file
///
/// Every write replaces the destination file in full; there is no append
/// mode, merging, or versioning. The output directory is created on demand.
#[derive(Debug, Clone)]
pub struct LogWriter {
    dir: PathBuf,
    path: PathBuf,
}

impl LogWriter {
    /// Create a writer for the configured destination
    #[must_use]
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            dir: config.output_dir.clone(),
            path: config.log_path(),
        }
    }

    /// Destination path of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the captured entries as a pretty-printed JSON array
    ///
    /// # Errors
    ///
    /// Returns error if the output directory cannot be created or the file
    /// cannot be written
    pub fn write(&self, entries: &[LogEntry]) -> Result<PathBuf> {
        if !self.dir.exists() {
            info!(
                "Log directory {} does not exist, creating it",
                self.dir.display()
            );
            fs::create_dir_all(&self.dir).map_err(|source| TapwireError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
        }

        let json = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, json).map_err(|source| TapwireError::WriteFile {
            path: self.path.clone(),
            source,
        })?;

        Ok(self.path.clone())
    }
}
