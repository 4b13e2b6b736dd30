//! Command-line interface definitions for mylogger.
//!
//! Uses clap's derive API for type-safe argument parsing.

use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::logger::Severity;

/// Write messages to syslog, or to a local fallback file when syslog is off.
///
/// Messages given as arguments are joined with spaces and logged once. With
/// no message arguments, every non-empty line of standard input is logged.
#[derive(Parser, Debug)]
#[command(name = "mylogger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Message words to log. Read from stdin when omitted.
    pub message: Vec<String>,

    /// Tag each record with this process name.
    ///
    /// Overrides `logger.ident` from the config files. Defaults to
    /// "UnknownProc" when neither is set.
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// Severity of the logged messages.
    ///
    /// Accepts syslog names (emerg, alert, crit, err, warning, notice, info,
    /// debug), common aliases (error, warn) or the numeric priority 0-7.
    #[arg(short = 'p', long = "priority", value_name = "LEVEL", default_value = "notice")]
    pub priority: Severity,

    /// Path to additional config file.
    ///
    /// This config file is merged on top of system and user configs,
    /// giving it the highest priority (except for CLI flags).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Deliver to syslog while it is available.
    #[arg(long = "syslog")]
    pub syslog: bool,

    /// Always write to the fallback file, even if a config file enables syslog.
    #[arg(long = "no-syslog", conflicts_with = "syslog")]
    pub no_syslog: bool,

    /// Write fallback records to this file.
    #[arg(long = "fallback-path", value_name = "PATH")]
    pub fallback_path: Option<PathBuf>,

    /// Increase diagnostic verbosity.
    ///
    /// Can be specified multiple times:
    /// -v    = info level
    /// -vv   = debug level
    /// -vvv  = trace level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The message given on the command line, if any.
    pub fn joined_message(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }

    /// The `logger.prefer_syslog` override requested by `--syslog` or
    /// `--no-syslog`, if either was given.
    pub fn prefer_syslog(&self) -> Option<bool> {
        match (self.syslog, self.no_syslog) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Call `f` with every non-empty line of `reader`.
///
/// Lines end at `\n`; a trailing `\r` is dropped. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD rather than ending the input.
pub fn for_each_input_line<R, F>(mut reader: R, mut f: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if !buf.is_empty() {
            f(&String::from_utf8_lossy(&buf));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::parse_from(["mylogger", "disk", "full"]);
        assert_eq!(cli.message, vec!["disk", "full"]);
        assert_eq!(cli.priority, Severity::Notice);
        assert!(cli.tag.is_none());
        assert!(!cli.syslog);
        assert!(!cli.no_syslog);
        assert_eq!(cli.prefer_syslog(), None);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.joined_message(), Some("disk full".to_string()));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "mylogger",
            "-t",
            "backupd",
            "-p",
            "err",
            "--syslog",
            "--fallback-path",
            "/var/tmp/fallback.log",
            "-c",
            "/etc/extra.toml",
            "-vv",
            "--",
            "-x",
            "flag-like",
        ]);

        assert_eq!(cli.tag, Some("backupd".to_string()));
        assert_eq!(cli.priority, Severity::Err);
        assert!(cli.syslog);
        assert_eq!(cli.prefer_syslog(), Some(true));
        assert_eq!(
            cli.fallback_path,
            Some(PathBuf::from("/var/tmp/fallback.log"))
        );
        assert_eq!(cli.config, Some(PathBuf::from("/etc/extra.toml")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.joined_message(), Some("-x flag-like".to_string()));
    }

    #[test]
    fn test_cli_numeric_priority() {
        let cli = Cli::parse_from(["mylogger", "-p", "0", "boom"]);
        assert_eq!(cli.priority, Severity::Emerg);
    }

    #[test]
    fn test_cli_rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["mylogger", "-p", "loud", "boom"]).is_err());
    }

    #[test]
    fn test_cli_without_message_reads_stdin() {
        let cli = Cli::parse_from(["mylogger", "-t", "svc"]);
        assert!(cli.joined_message().is_none());
    }

    #[test]
    fn test_cli_no_syslog() {
        let cli = Cli::parse_from(["mylogger", "--no-syslog", "hi"]);
        assert!(cli.no_syslog);
        assert_eq!(cli.prefer_syslog(), Some(false));

        let both = Cli::try_parse_from(["mylogger", "--syslog", "--no-syslog", "hi"]);
        assert!(both.is_err());
    }

    #[test]
    fn test_input_lines_skip_blanks_and_strip_endings() {
        let input: &[u8] = b"one\r\n\n  two\nlast";
        let mut lines = Vec::new();
        for_each_input_line(input, |l| lines.push(l.to_string())).unwrap();
        assert_eq!(lines, vec!["one", "  two", "last"]);
    }

    #[test]
    fn test_input_lines_survive_invalid_utf8() {
        let input: &[u8] = b"first\n\xff\xfe bad\nthird\n";
        let mut lines = Vec::new();
        for_each_input_line(input, |l| lines.push(l.to_string())).unwrap();
        assert_eq!(lines, vec!["first", "\u{FFFD}\u{FFFD} bad", "third"]);
    }
}
