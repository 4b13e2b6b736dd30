//! Errors raised while building the effective configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the configuration could not be loaded, checked or printed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file given with `--config` does not exist.
    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),

    /// A config file is not valid TOML for the mylogger schema.
    #[error("malformed config {}: {source}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// TOML decoding error.
        source: toml::de::Error,
    },

    /// A setting parsed but holds an unusable value.
    #[error("{field}: {message}")]
    Invalid {
        /// Dotted key, e.g. `logger.fallback_path`.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// The effective configuration could not be rendered back to TOML.
    #[error("cannot render config as TOML: {0}")]
    Render(#[from] toml::ser::Error),
}
