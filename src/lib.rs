//! mylogger: leveled logging to syslog with a local fallback file
//!
//! This crate provides a process-wide logger that tags each message with a
//! syslog severity and delivers it to the local syslog daemon, or appends it
//! to a fallback file when syslog is switched off or has failed.
//!
//! # Architecture
//!
//! - **Logger**: Context object with the dual-sink routing and sticky failover
//! - **Config**: Hierarchical TOML configuration for routing and identity
//! - **CLI**: `logger(1)`-style front end for shell scripts
//!
//! # Usage
//!
//! ```ignore
//! use mylogger::{log_err, log_info, logger};
//!
//! logger::log_init(Some("backupd"));
//! log_info!("backup of {} started", "/home");
//! log_err!("disk full");
//! logger::log_close();
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod logger;
