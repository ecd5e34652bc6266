//! Verbosity control for diagnostics on stderr.
//!
//! Record output (ids, statuses, report rows) goes to stdout; every
//! message produced here goes to stderr so scripted callers can
//! separate the two streams.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted when neither CLI flag is set.
const LOG_MODE_VAR: &str = "AVIA_LOG_MODE";

/// How much diagnostic output to emit.
///
/// Ordered so that a comparison against the threshold decides whether a
/// message is printed.
///
/// # Examples
///
/// ```
/// use avia::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but record output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug traces.
    Verbose,
}

impl LogLevel {
    const fn label(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts `quiet`, `normal`, or `verbose`, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::LogLevel;
    ///
    /// let level: LogLevel = "VERBOSE".parse().unwrap();
    /// assert_eq!(level, LogLevel::Verbose);
    /// assert!("loud".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!("unknown log mode: {other}")),
        }
    }
}

/// Stderr logger gated by a [`LogLevel`] threshold.
///
/// # Examples
///
/// ```
/// use avia::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("plane has no recorded repairs");
/// logger.debug("not printed at Normal");
/// ```
pub struct Logger {
    threshold: LogLevel,
}

impl Logger {
    /// Creates a logger that prints messages at or below `threshold`.
    #[must_use]
    pub const fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// Returns the active threshold.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.threshold
    }

    fn emit(&self, at: LogLevel, tag: &str, message: &str) {
        if self.threshold >= at {
            eprintln!("{tag}: {message}");
        }
    }

    /// Prints an error line unless the logger is quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Prints a warning line unless the logger is quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Prints an informational line at verbose only.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Prints a debug line at verbose only.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds the process logger from CLI flags and the environment.
///
/// Resolution order: `verbose` flag, then `quiet` flag, then the
/// `AVIA_LOG_MODE` environment variable, then Normal. A value of
/// `AVIA_LOG_MODE` that parses as no known mode is ignored rather than
/// treated as an error.
///
/// # Examples
///
/// ```
/// use avia::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let threshold = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(threshold)
}
