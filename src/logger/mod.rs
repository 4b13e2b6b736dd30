//! Leveled logging to syslog with a local fallback file.
//!
//! A [`Logger`] accepts messages at one of eight syslog severities. While
//! `prefer_syslog` is set and syslog is healthy, messages go to the local
//! syslog daemon (facility `LOG_USER`, tagged `name[pid]`). Otherwise they
//! are appended to a fallback file, one line per message:
//!
//! ```text
//! 2026 Oct 16 backupd[4242] ERR: disk full
//! ```
//!
//! # Failover
//!
//! The first failed syslog delivery marks syslog unavailable for the rest of
//! the logger's life; that message and all later ones go to the fallback
//! file. If the fallback file cannot be written, a notice goes to the error
//! stream (stderr by default) and the message is dropped.
//!
//! # Usage
//!
//! ```ignore
//! use mylogger::{log_err, logger};
//!
//! logger::log_init(Some("backupd"));
//! log_err!("disk {} full", "/dev/sda1");
//! logger::log_close();
//! ```

mod context;
mod error;
mod fallback;
mod global;
mod message;
mod record;
mod severity;
mod syslog;

pub use context::{DEFAULT_IDENT, FALLBACK_FAILED_PREFIX, Logger, LoggerBuilder, LoggerConfig};
pub use error::LoggerError;
pub use fallback::{DEFAULT_FALLBACK_PATH, FallbackFile};
pub use global::{global, install, log_close, log_init, log_message};
pub use message::{MAX_PROCESS_NAME_LEN, MESSAGE_CAPACITY};
pub use record::{DATE_FORMAT, FallbackRecord};
pub use severity::{ParseSeverityError, Severity};
pub use self::syslog::{SyslogBackend, UnixSyslog};
