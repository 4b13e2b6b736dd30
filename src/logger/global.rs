//! Process-wide logger instance and per-severity macros.

use std::fmt;
use std::sync::OnceLock;

use super::context::Logger;
use super::error::LoggerError;
use super::severity::Severity;

/// Global logger instance.
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
///
/// Must happen before the first call to [`global`], which otherwise creates
/// a default logger. Returns an error if a global logger already exists.
pub fn install(logger: Logger) -> Result<(), LoggerError> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Get the process-wide logger, creating a default one on first use.
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}

/// Initialize the global logger. See [`Logger::init`].
pub fn log_init(ident: Option<&str>) -> bool {
    global().init(ident)
}

/// Close the global logger's syslog connection. See [`Logger::close`].
pub fn log_close() -> bool {
    global().close()
}

/// Log through the global logger. Prefer the `log_*!` macros.
pub fn log_message(severity: Severity, args: fmt::Arguments<'_>) {
    global().log(severity, args);
}

/// Log at [`Severity::Emerg`] through the global logger.
#[macro_export]
macro_rules! log_emerg {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Emerg, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Alert`] through the global logger.
#[macro_export]
macro_rules! log_alert {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Alert, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Crit`] through the global logger.
#[macro_export]
macro_rules! log_crit {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Crit, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Err`] through the global logger.
#[macro_export]
macro_rules! log_err {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Err, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Warning`] through the global logger.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Warning, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Notice`] through the global logger.
#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Notice, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Info`] through the global logger.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Info, format_args!($($arg)+))
    };
}

/// Log at [`Severity::Debug`] through the global logger.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::logger::log_message($crate::logger::Severity::Debug, format_args!($($arg)+))
    };
}
