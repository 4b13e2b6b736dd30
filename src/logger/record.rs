//! Fallback log records.

use std::fmt;

use chrono::{Local, NaiveDate};

use super::severity::Severity;

/// Date format of the fallback file, e.g. `2026 Oct 16`.
pub const DATE_FORMAT: &str = "%Y %b %d";

/// One line of the fallback log file.
///
/// Renders as `<YYYY Mon DD> <process_name>[<pid>] <LEVEL>: <message>`.
#[derive(Debug, Clone)]
pub struct FallbackRecord<'a> {
    /// Local date the record was written.
    pub date: NaiveDate,
    /// Process name given at init.
    pub process_name: &'a str,
    /// Process ID captured at init.
    pub pid: u32,
    /// Message severity.
    pub severity: Severity,
    /// Rendered message text.
    pub message: &'a str,
}

impl<'a> FallbackRecord<'a> {
    /// Create a record stamped with today's local date.
    pub fn now(process_name: &'a str, pid: u32, severity: Severity, message: &'a str) -> Self {
        Self {
            date: Local::now().date_naive(),
            process_name,
            pid,
            severity,
            message,
        }
    }
}

impl fmt::Display for FallbackRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}[{}] {}: {}",
            self.date.format(DATE_FORMAT),
            self.process_name,
            self.pid,
            self.severity,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format() {
        let record = FallbackRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            process_name: "backupd",
            pid: 4242,
            severity: Severity::Err,
            message: "disk full",
        };

        assert_eq!(record.to_string(), "2025 Mar 07 backupd[4242] ERR: disk full");
    }

    #[test]
    fn test_record_now_uses_local_date() {
        let before = Local::now().date_naive();
        let record = FallbackRecord::now("svc", 1, Severity::Info, "hello");
        let after = Local::now().date_naive();

        assert!(record.date == before || record.date == after);
    }
}
