//! Errors as the binary reports them.
//!
//! The library's [`avia::Error`] gets folded into [`CliError`], which
//! owns the message a user sees and the process exit code.

use avia::Error as LibError;
use std::fmt;

/// A failure at the command layer.
#[derive(Debug)]
pub enum CliError {
    /// A library failure with no special handling of its own.
    Library(LibError),

    /// Arguments that clap accepted but the command cannot use.
    InvalidArguments(String),

    /// A filesystem failure outside the library.
    Io(std::io::Error),

    /// The database lock never came free.
    Timeout,

    /// No data directory, and auto-init was disabled.
    NoDataDirectory,

    /// The configuration file is unusable.
    Config(String),
}

impl CliError {
    /// The process exit code for this failure.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (rejected input, missing record)
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => {
                if lib_err.is_user_correctable() || lib_err.is_not_found() {
                    1
                } else {
                    6
                }
            }
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (use --data-dir or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::LockTimeout { .. } => CliError::Timeout,
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            LibError::Configuration(_) => CliError::Config(e.to_string()),
            _ => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
