//! Syslog delivery backends.
//!
//! [`SyslogBackend`] is the seam between the logger and the system logging
//! facility. [`UnixSyslog`] talks to the local syslog daemon over its Unix
//! socket using RFC 3164 framing and the `LOG_USER` facility.

use syslog::{Facility, Formatter3164, LoggerBackend};
use tracing::debug;

use super::error::LoggerError;
use super::severity::Severity;

/// A connection to a system logging facility.
pub trait SyslogBackend: Send {
    /// Open (or reopen) the connection, tagging records with `ident` and `pid`.
    fn open(&mut self, ident: &str, pid: u32) -> Result<(), LoggerError>;

    /// Deliver one message.
    fn send(&mut self, severity: Severity, message: &str) -> Result<(), LoggerError>;

    /// Release the connection. Must be safe to call when nothing is open.
    fn close(&mut self);
}

type Writer = syslog::Logger<LoggerBackend, Formatter3164>;

/// Syslog backend connected to the local daemon's Unix socket.
///
/// The connection is established in [`open`](SyslogBackend::open). After
/// [`close`](SyslogBackend::close), the next [`send`](SyslogBackend::send)
/// reconnects with the last identity it was given.
#[derive(Default)]
pub struct UnixSyslog {
    formatter: Option<Formatter3164>,
    writer: Option<Writer>,
}

impl UnixSyslog {
    /// Create a backend with no open connection.
    pub fn new() -> Self {
        Self::default()
    }

    fn connect(formatter: &Formatter3164) -> Result<Writer, LoggerError> {
        syslog::unix(formatter.clone()).map_err(|e| LoggerError::SyslogConnection(e.to_string()))
    }

    /// Whether a connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.writer.is_some()
    }
}

impl SyslogBackend for UnixSyslog {
    fn open(&mut self, ident: &str, pid: u32) -> Result<(), LoggerError> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: ident.to_string(),
            pid,
        };

        // Remember the identity even if the daemon is down, so send() can retry.
        self.writer = None;
        self.formatter = Some(formatter.clone());
        self.writer = Some(Self::connect(&formatter)?);

        debug!("Connected to syslog as '{}[{}]'", ident, pid);
        Ok(())
    }

    fn send(&mut self, severity: Severity, message: &str) -> Result<(), LoggerError> {
        if self.writer.is_none() {
            let formatter = self
                .formatter
                .as_ref()
                .ok_or_else(|| LoggerError::Send("syslog connection never opened".to_string()))?;
            self.writer = Some(Self::connect(formatter)?);
        }

        let Some(writer) = self.writer.as_mut() else {
            return Err(LoggerError::Send("syslog connection unavailable".to_string()));
        };

        let result = match severity {
            Severity::Emerg => writer.emerg(message),
            Severity::Alert => writer.alert(message),
            Severity::Crit => writer.crit(message),
            Severity::Err => writer.err(message),
            Severity::Warning => writer.warning(message),
            Severity::Notice => writer.notice(message),
            Severity::Info => writer.info(message),
            Severity::Debug => writer.debug(message),
        };

        result.map_err(|e| LoggerError::Send(e.to_string()))
    }

    fn close(&mut self) {
        if self.writer.take().is_some() {
            debug!("Closed syslog connection");
        }
    }
}
