//! Error surface of the avia library.
//!
//! One [`Error`] enum covers every failure a caller can see, built on
//! `thiserror`. Model-level failures convert into it so operations can
//! use `?` throughout.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library.
///
/// # Examples
///
/// ```
/// use avia::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a record-keeping operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A field failed length, range, or format validation.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// What was wrong with the value.
        message: String,
    },

    /// A date string could not be parsed as a calendar date.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    DateFormat {
        /// The input that failed to parse.
        input: String,
    },

    /// A reservation status was not one of W, R, or C.
    #[error("invalid status '{input}': expected one of W, R, C")]
    InvalidStatus {
        /// The input that failed to parse.
        input: String,
    },

    /// Identifier allocation failed for an entity table.
    #[error("allocation failed for {entity}: {message}")]
    Allocation {
        /// The entity table being allocated for.
        entity: String,
        /// What went wrong during allocation.
        message: String,
    },

    /// The underlying store reported a failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Another session held the write lock past the configured wait.
    #[error("timed out waiting {seconds}s for the database lock")]
    LockTimeout {
        /// How long the session waited before giving up.
        seconds: u64,
    },

    /// A record the operation needs does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// What was looked up, for the caller's message.
        resource: String,
    },

    /// No data directory exists and auto-initialization is off.
    #[error("no data directory at {}", path.display())]
    DataDirectoryNotFound {
        /// Where the directory was expected.
        path: PathBuf,
    },

    /// The store was stamped by a different build of the schema.
    #[error("schema version mismatch: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The version this build installs.
        expected: u32,
        /// The version stamped in the file.
        found: u32,
    },

    /// The backing store could not be opened at session start.
    #[error("connection failed: {message}")]
    Connection {
        /// What prevented the open.
        message: String,
    },
}

impl From<crate::model::ValidationError> for Error {
    fn from(err: crate::model::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::model::DateFormatError> for Error {
    fn from(err: crate::model::DateFormatError) -> Self {
        Self::DateFormat { input: err.input }
    }
}

impl From<crate::model::InvalidStatusError> for Error {
    fn from(err: crate::model::InvalidStatusError) -> Self {
        Self::InvalidStatus { input: err.input }
    }
}

impl Error {
    /// True for a lookup that found nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::Error;
    ///
    /// let err = Error::NotFound { resource: "flight 3".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for input failures the user can fix and retry.
    ///
    /// Validation, date-format, and status errors abort only the current
    /// operation; the session may continue.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::DateFormat { .. } | Self::InvalidStatus { .. }
        )
    }
}
