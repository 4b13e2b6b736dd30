//! Append-only fallback log file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::LoggerError;
use super::record::FallbackRecord;

/// Default fallback file location.
pub const DEFAULT_FALLBACK_PATH: &str = "/tmp/testlogs";

/// Local file that receives messages when syslog is off or unavailable.
///
/// The file is opened in append mode for every record and closed again
/// afterwards. It is never rotated or size-capped.
#[derive(Debug, Clone)]
pub struct FallbackFile {
    path: PathBuf,
}

impl FallbackFile {
    /// Create a fallback sink for `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the fallback file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single line.
    pub fn append(&self, record: &FallbackRecord<'_>) -> Result<(), LoggerError> {
        let line = format!("{record}\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        // Single write so concurrent appenders keep whole lines.
        file.write_all(line.as_bytes())
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> LoggerError {
        LoggerError::FallbackWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FallbackFile {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PATH)
    }
}
