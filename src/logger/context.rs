//! The logger context object.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use super::fallback::{DEFAULT_FALLBACK_PATH, FallbackFile};
use super::message::{MAX_PROCESS_NAME_LEN, MESSAGE_CAPACITY, render_bounded, truncate_chars};
use super::record::FallbackRecord;
use super::severity::Severity;
use super::syslog::{SyslogBackend, UnixSyslog};

/// Process name used when `init` is called without an identifier.
pub const DEFAULT_IDENT: &str = "UnknownProc";

/// Prefix of the notice written to the error stream when a fallback write fails.
pub const FALLBACK_FAILED_PREFIX: &str = "Fallback log failed: ";

/// Routing settings for a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Deliver to syslog while it is available. When false, every message
    /// goes to the fallback file.
    pub prefer_syslog: bool,
    /// Fallback file location.
    pub fallback_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefer_syslog: false,
            fallback_path: PathBuf::from(DEFAULT_FALLBACK_PATH),
        }
    }
}

struct State {
    initialized: bool,
    process_name: String,
    pid: u32,
    syslog_available: bool,
    backend: Box<dyn SyslogBackend>,
    error_stream: Box<dyn Write + Send>,
}

/// Leveled logger that writes to syslog or to a local fallback file.
///
/// All state sits behind one mutex, so a `Logger` can be shared freely
/// between threads. Logging never fails from the caller's point of view:
/// delivery errors turn into a one-way switch to the fallback file, and
/// fallback errors into a notice on the error stream.
pub struct Logger {
    config: LoggerConfig,
    fallback: FallbackFile,
    state: Mutex<State>,
}

impl Logger {
    /// Create a logger using the local syslog daemon and stderr.
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start building a logger with custom backends.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Initialize the logger with an optional process identifier.
    ///
    /// Idempotent: once initialized, further calls return `true` without
    /// touching any state. Identifiers longer than 127 characters are
    /// truncated. Always returns `true`.
    pub fn init(&self, ident: Option<&str>) -> bool {
        let mut state = self.lock();
        if state.initialized {
            return true;
        }

        state.process_name = truncate_chars(ident.unwrap_or(DEFAULT_IDENT), MAX_PROCESS_NAME_LEN)
            .to_string();
        state.pid = std::process::id();

        let State {
            backend,
            process_name,
            pid,
            ..
        } = &mut *state;
        if let Err(e) = backend.open(process_name, *pid) {
            if self.config.prefer_syslog {
                warn!("Syslog not reachable at init, will retry on first delivery: {}", e);
            } else {
                debug!("Syslog not reachable at init: {}", e);
            }
        }

        state.syslog_available = true;
        state.initialized = true;
        debug!(
            "Logger initialized as '{}[{}]' (prefer_syslog={})",
            state.process_name, state.pid, self.config.prefer_syslog
        );
        true
    }

    /// Release the syslog connection. Always returns `true`.
    ///
    /// Availability is left as is; a later syslog delivery reconnects.
    pub fn close(&self) -> bool {
        self.lock().backend.close();
        true
    }

    /// Log a preformatted message at `severity`.
    ///
    /// Messages longer than 1023 bytes are truncated.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let message = render_bounded(args, MESSAGE_CAPACITY);
        let mut state = self.lock();

        if self.config.prefer_syslog && state.syslog_available {
            match state.backend.send(severity, &message) {
                Ok(()) => return,
                Err(e) => {
                    warn!("Syslog delivery failed, switching to fallback file: {}", e);
                    state.syslog_available = false;
                }
            }
        }

        self.write_fallback(&mut state, severity, &message);
    }

    fn write_fallback(&self, state: &mut State, severity: Severity, message: &str) {
        let record = FallbackRecord::now(&state.process_name, state.pid, severity, message);
        if let Err(e) = self.fallback.append(&record) {
            debug!("{}", e);
            // Nowhere left to report a failing error stream.
            let _ = writeln!(state.error_stream, "{FALLBACK_FAILED_PREFIX}{message}");
            let _ = state.error_stream.flush();
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock leaves the state consistent enough to log.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    /// Whether syslog delivery is still considered usable.
    pub fn syslog_available(&self) -> bool {
        self.lock().syslog_available
    }

    /// Process name used in fallback records.
    pub fn process_name(&self) -> String {
        self.lock().process_name.clone()
    }

    /// Process ID used in fallback records.
    pub fn pid(&self) -> u32 {
        self.lock().pid
    }

    /// Routing settings.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("initialized", &state.initialized)
            .field("process_name", &state.process_name)
            .field("pid", &state.pid)
            .field("syslog_available", &state.syslog_available)
            .finish()
    }
}

/// Builder for [`Logger`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    backend: Option<Box<dyn SyslogBackend>>,
    error_stream: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Use the given routing settings.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom syslog backend instead of [`UnixSyslog`].
    #[must_use]
    pub fn backend(mut self, backend: impl SyslogBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Write fallback failure notices to `stream` instead of stderr.
    #[must_use]
    pub fn error_stream(mut self, stream: impl Write + Send + 'static) -> Self {
        self.error_stream = Some(Box::new(stream));
        self
    }

    /// Build the logger. It starts uninitialized.
    pub fn build(self) -> Logger {
        let state = State {
            initialized: false,
            process_name: DEFAULT_IDENT.to_string(),
            pid: std::process::id(),
            syslog_available: false,
            backend: self.backend.unwrap_or_else(|| Box::new(UnixSyslog::new())),
            error_stream: self.error_stream.unwrap_or_else(|| Box::new(io::stderr())),
        };

        Logger {
            fallback: FallbackFile::new(self.config.fallback_path.clone()),
            config: self.config,
            state: Mutex::new(state),
        }
    }
}
