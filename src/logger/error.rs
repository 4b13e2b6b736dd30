//! Logger error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur inside the logger.
///
/// None of these reach callers of [`Logger::log`](super::Logger::log); they
/// surface from backends and from [`install`](super::install).
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Failed to connect to syslog.
    #[error("Failed to connect to syslog: {0}")]
    SyslogConnection(String),

    /// Failed to deliver a message to syslog.
    #[error("Failed to send log message: {0}")]
    Send(String),

    /// Failed to append to the fallback file.
    #[error("Failed to write fallback log {path}: {source}")]
    FallbackWrite {
        /// Path of the fallback file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Global logger already installed.
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}
