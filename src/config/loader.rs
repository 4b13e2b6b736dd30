//! Configuration loading with hierarchy merging.
//!
//! Configuration is loaded from multiple sources and merged in order:
//!
//! 1. Built-in defaults
//! 2. System config: `/etc/mylogger/config.toml`
//! 3. User config: `~/.config/mylogger/config.toml`
//! 4. Additional config file (via `--config` flag)
//! 5. CLI flags (highest priority)
//!
//! Scalars set by a later source override earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::schema::{Config, LoggerSection};
use crate::cli::Cli;

/// System-wide configuration path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/mylogger/config.toml";

/// User configuration directory name.
pub const USER_CONFIG_DIR: &str = "mylogger";

/// User configuration filename.
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Configuration loader with support for hierarchy merging.
pub struct ConfigLoader {
    /// Path to system-wide configuration.
    system_path: PathBuf,
    /// Path to user configuration.
    user_path: PathBuf,
}

impl ConfigLoader {
    /// Create a new ConfigLoader with default paths.
    #[must_use]
    pub fn new() -> Self {
        let user_config_dir = dirs::config_dir()
            .map(|p| p.join(USER_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(".config").join(USER_CONFIG_DIR));

        Self {
            system_path: PathBuf::from(SYSTEM_CONFIG_PATH),
            user_path: user_config_dir.join(USER_CONFIG_FILE),
        }
    }

    /// Create a ConfigLoader with custom paths (for testing).
    #[must_use]
    pub fn with_paths(system_path: PathBuf, user_path: PathBuf) -> Self {
        Self {
            system_path,
            user_path,
        }
    }

    /// Load and merge configuration from all sources.
    ///
    /// Missing system and user files are skipped. A missing `--config` file,
    /// invalid TOML, or an invalid value is an error.
    pub fn load(&self, cli: &Cli) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        for (label, path) in [("system", &self.system_path), ("user", &self.user_path)] {
            if let Some(layer) = self.load_file(path)? {
                config.merge(layer);
                debug!("Loaded {} config from {:?}", label, path);
            } else {
                debug!("No {} config found at {:?}", label, path);
            }
        }

        // Load and merge additional config file from CLI
        if let Some(ref cli_config_path) = cli.config {
            match self.load_file(cli_config_path)? {
                Some(cli_config) => {
                    config.merge(cli_config);
                    debug!("Loaded additional config from {:?}", cli_config_path);
                }
                // Unlike system/user config, a missing CLI-specified config is an error
                None => return Err(ConfigError::MissingFile(cli_config_path.clone())),
            }
        }

        // Apply CLI flags (highest priority)
        config.merge(Config {
            logger: LoggerSection {
                ident: cli.tag.clone(),
                prefer_syslog: cli.prefer_syslog(),
                fallback_path: cli.fallback_path.clone(),
            },
            ..Default::default()
        });

        config.validate()?;
        Ok(config)
    }

    /// Load a config file, returning None if it doesn't exist.
    fn load_file(&self, path: &Path) -> Result<Option<Config>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Config =
                    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LoggerConfig;
    use clap::Parser;
    use tempfile::tempdir;

    fn loader_in(dir: &Path) -> ConfigLoader {
        ConfigLoader::with_paths(dir.join("system.toml"), dir.join("user.toml"))
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let dir = tempdir().unwrap();
        let cli = Cli::parse_from(["mylogger"]);

        let config = loader_in(dir.path()).load(&cli).unwrap();

        assert_eq!(config.logger_config(), LoggerConfig::default());
        assert!(config.logger.ident.is_none());
    }

    #[test]
    fn test_user_config_overrides_system() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("system.toml"),
            "[logger]\nident = \"system\"\nprefer_syslog = true\n",
        )
        .unwrap();
        fs::write(dir.path().join("user.toml"), "[logger]\nident = \"user\"\n").unwrap();

        let cli = Cli::parse_from(["mylogger"]);
        let config = loader_in(dir.path()).load(&cli).unwrap();

        assert_eq!(config.logger.ident.as_deref(), Some("user"));
        assert_eq!(config.logger.prefer_syslog, Some(true));
    }

    #[test]
    fn test_cli_flags_override_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("user.toml"),
            "[logger]\nident = \"user\"\nfallback_path = \"/var/tmp/user.log\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "mylogger",
            "-t",
            "cli",
            "--syslog",
            "--fallback-path",
            "/var/tmp/cli.log",
        ]);
        let config = loader_in(dir.path()).load(&cli).unwrap();

        assert_eq!(config.logger.ident.as_deref(), Some("cli"));
        assert_eq!(
            config.logger_config(),
            LoggerConfig {
                prefer_syslog: true,
                fallback_path: PathBuf::from("/var/tmp/cli.log"),
            }
        );
    }

    #[test]
    fn test_no_syslog_flag_overrides_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("user.toml"), "[logger]\nprefer_syslog = true\n").unwrap();

        let cli = Cli::parse_from(["mylogger", "--no-syslog"]);
        let config = loader_in(dir.path()).load(&cli).unwrap();
        assert_eq!(config.logger.prefer_syslog, Some(false));
        assert!(!config.logger_config().prefer_syslog);

        let cli = Cli::parse_from(["mylogger"]);
        let config = loader_in(dir.path()).load(&cli).unwrap();
        assert_eq!(config.logger.prefer_syslog, Some(true));
    }

    #[test]
    fn test_additional_config_file() {
        let dir = tempdir().unwrap();
        let extra = dir.path().join("extra.toml");
        fs::write(&extra, "[general]\nlog_level = \"debug\"\n").unwrap();

        let cli = Cli::parse_from(["mylogger", "-c", extra.to_str().unwrap()]);
        let config = loader_in(dir.path()).load(&cli).unwrap();

        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_cli_config_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let cli = Cli::parse_from(["mylogger", "-c", missing.to_str().unwrap()]);
        let err = loader_in(dir.path()).load(&cli).unwrap_err();

        assert!(matches!(err, ConfigError::MissingFile(ref p) if *p == missing));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("user.toml"), "[logger\nident = ").unwrap();

        let cli = Cli::parse_from(["mylogger"]);
        let err = loader_in(dir.path()).load(&cli).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("system.toml"), "[general]\nlog_level = \"loud\"\n").unwrap();

        let cli = Cli::parse_from(["mylogger"]);
        let err = loader_in(dir.path()).load(&cli).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
