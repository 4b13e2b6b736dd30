//! Configuration system for mylogger.
//!
//! This module provides TOML configuration loading with hierarchy merging.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded from multiple sources and merged in order:
//!
//! 1. System config: `/etc/mylogger/config.toml`
//! 2. User config: `~/.config/mylogger/config.toml`
//! 3. Additional config file (via `--config` flag)
//! 4. CLI flags (highest priority)
//!
//! Missing system and user files are fine; built-in defaults apply.
//!
//! # Example
//!
//! ```toml
//! [general]
//! log_level = "warn"
//!
//! [logger]
//! ident = "backupd"
//! prefer_syslog = true
//! fallback_path = "/tmp/testlogs"
//! ```

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::{ConfigLoader, SYSTEM_CONFIG_PATH};
pub use schema::{Config, GeneralConfig, LOG_LEVELS, LoggerSection};
