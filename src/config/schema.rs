//! Configuration schema definitions.
//!
//! This module defines the structure of the mylogger configuration files.
//! Configuration is loaded from multiple sources and merged in order:
//!
//! 1. System config: `/etc/mylogger/config.toml`
//! 2. User config: `~/.config/mylogger/config.toml`
//! 3. Additional config file (via `--config` flag)
//! 4. CLI flags (highest priority)
//!
//! Every field is optional; unset fields fall back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;
use crate::logger::{DEFAULT_FALLBACK_PATH, LoggerConfig};

/// Accepted values for `general.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Logger routing settings.
    #[serde(default)]
    pub logger: LoggerSection,
}

impl Config {
    /// Merge another config into this one.
    ///
    /// Scalars set in `other` override the ones in `self`.
    pub fn merge(&mut self, other: Config) {
        self.general.merge(other.general);
        self.logger.merge(other.logger);
    }

    /// Check values that TOML parsing alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref level) = self.general.log_level
            && !LOG_LEVELS.contains(&level.as_str())
        {
            return Err(ConfigError::Invalid {
                field: "general.log_level",
                message: format!("expected one of {:?}, got '{}'", LOG_LEVELS, level),
            });
        }

        if let Some(ref path) = self.logger.fallback_path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "logger.fallback_path",
                message: "path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Render the configuration as TOML, omitting unset keys.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Routing settings for building a [`Logger`](crate::logger::Logger).
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            prefer_syslog: self.logger.prefer_syslog.unwrap_or(false),
            fallback_path: self
                .logger
                .fallback_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FALLBACK_PATH)),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Diagnostic log level: trace, debug, info, warn, error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl GeneralConfig {
    fn merge(&mut self, other: GeneralConfig) {
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }
}

/// `[logger]` section.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LoggerSection {
    /// Process name passed to `init`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,

    /// Deliver to syslog while it is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_syslog: Option<bool>,

    /// Fallback file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_path: Option<PathBuf>,
}

impl LoggerSection {
    fn merge(&mut self, other: LoggerSection) {
        if other.ident.is_some() {
            self.ident = other.ident;
        }
        if other.prefer_syslog.is_some() {
            self.prefer_syslog = other.prefer_syslog;
        }
        if other.fallback_path.is_some() {
            self.fallback_path = other.fallback_path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [general]
            log_level = "debug"

            [logger]
            ident = "backupd"
            prefer_syslog = true
            fallback_path = "/var/tmp/backupd.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.logger.ident.as_deref(), Some("backupd"));
        assert_eq!(
            config.logger_config(),
            LoggerConfig {
                prefer_syslog: true,
                fallback_path: PathBuf::from("/var/tmp/backupd.log"),
            }
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logger_config(), LoggerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_overrides_only_set_scalars() {
        let mut base: Config = toml::from_str(
            r#"
            [logger]
            ident = "base"
            prefer_syslog = true
            "#,
        )
        .unwrap();
        let overlay: Config = toml::from_str(
            r#"
            [logger]
            ident = "overlay"
            "#,
        )
        .unwrap();

        base.merge(overlay);
        assert_eq!(base.logger.ident.as_deref(), Some("overlay"));
        assert_eq!(base.logger.prefer_syslog, Some(true));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.general.log_level = Some("loud".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "general.log_level", .. })
        ));

        let mut config = Config::default();
        config.logger.fallback_path = Some(PathBuf::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "logger.fallback_path", .. })
        ));
    }

    #[test]
    fn test_to_toml_reads_back_as_same_config() {
        let mut config = Config::default();
        config.general.log_level = Some("info".to_string());
        config.logger.prefer_syslog = Some(false);
        config.logger.fallback_path = Some(PathBuf::from("/var/tmp/svc.log"));

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("prefer_syslog = false"));
        assert!(!rendered.contains("ident"));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
