//! Configuration for the avia library.
//!
//! Settings are resolved from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (the builder's `with_*` methods, fed from
//!    CLI flags)
//! 2. Environment variables (`AVIA_DATA_DIR`, `AVIA_BUSY_TIMEOUT`,
//!    `AVIA_DEFAULT_STATUS`)
//! 3. The config file at `<data_dir>/config.yaml`
//! 4. Built-in defaults
//!
//! The data directory itself bootstraps the chain: the config file is
//! looked up inside the resolved data directory, so a `data_dir` entry
//! in the file only takes effect when neither a flag nor the
//! environment picked the directory.
//!
//! # Examples
//!
//! ```no_run
//! use avia::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("database at {}", config.database_path().display());
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::default_data_dir;
use crate::error::{Error, Result};
use crate::ReservationStatus;

/// Name of the SQLite database file inside the data directory.
pub const DATABASE_FILE: &str = "avia.db";

/// Name of the optional config file inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// On-disk configuration, as parsed from `config.yaml`.
///
/// Every field is optional; absent fields fall through to the
/// environment or the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Overrides the data directory. Only honored when the directory
    /// was not already chosen by a flag or the environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Database lock wait in whole seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy_timeout: Option<u64>,

    /// Default reservation status letter or name for bookings that do
    /// not specify one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_status: Option<String>,
}

impl FileConfig {
    /// Loads a config file from the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Configuration`] if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

/// Fully resolved configuration.
///
/// Produced by [`ConfigBuilder::build`]; every field holds a concrete
/// value with the precedence rules already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the database and config file.
    pub data_dir: PathBuf,

    /// How long to wait for a database lock before giving up.
    pub busy_timeout: Duration,

    /// Status applied to bookings that do not specify one.
    pub default_status: ReservationStatus,
}

impl Config {
    /// Returns the path of the SQLite database file.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use std::time::Duration;
    /// use avia::config::Config;
    /// use avia::ReservationStatus;
    ///
    /// let config = Config {
    ///     data_dir: PathBuf::from("/tmp/avia"),
    ///     busy_timeout: Duration::from_secs(5),
    ///     default_status: ReservationStatus::Waitlisted,
    /// };
    /// assert_eq!(config.database_path(), PathBuf::from("/tmp/avia/avia.db"));
    /// ```
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Builder for resolving a [`Config`] from flags, environment, and file.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use avia::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_data_dir(Some(PathBuf::from("/tmp/avia")))
///     .with_busy_timeout(Some(10))
///     .build()
///     .unwrap();
/// assert_eq!(config.busy_timeout.as_secs(), 10);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    busy_timeout: Option<u64>,
    default_status: Option<ReservationStatus>,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the data directory. `None` leaves resolution to the
    /// environment, the config file, and the default.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Overrides the busy timeout in whole seconds.
    #[must_use]
    pub const fn with_busy_timeout(mut self, seconds: Option<u64>) -> Self {
        self.busy_timeout = seconds;
        self
    }

    /// Overrides the default reservation status.
    #[must_use]
    pub const fn with_default_status(mut self, status: Option<ReservationStatus>) -> Self {
        self.default_status = status;
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The home directory cannot be determined and no data directory
    ///   was supplied ([`Error::DataDirectoryNotFound`])
    /// - `AVIA_BUSY_TIMEOUT` is not a whole number of seconds
    ///   ([`Error::Validation`])
    /// - The config file exists but is unreadable or malformed
    ///   ([`Error::Io`], [`Error::Configuration`])
    /// - A status value in the environment or file is not recognized
    ///   ([`Error::InvalidStatus`])
    pub fn build(self) -> Result<Config> {
        let dir_pinned = self.data_dir.is_some() || env::var_os("AVIA_DATA_DIR").is_some();
        let mut data_dir = match self.data_dir {
            Some(dir) => dir,
            None => match env::var_os("AVIA_DATA_DIR") {
                Some(dir) => PathBuf::from(dir),
                None => default_data_dir()?,
            },
        };

        let file = {
            let path = data_dir.join(CONFIG_FILE);
            if path.exists() {
                FileConfig::load(&path)?
            } else {
                FileConfig::default()
            }
        };

        if !dir_pinned {
            if let Some(dir) = file.data_dir {
                data_dir = dir;
            }
        }

        let busy_timeout = match self.busy_timeout {
            Some(seconds) => seconds,
            None => match env::var("AVIA_BUSY_TIMEOUT") {
                Ok(raw) => raw.parse().map_err(|_| Error::Validation {
                    field: "AVIA_BUSY_TIMEOUT".to_string(),
                    message: format!("must be a whole number of seconds, got {raw:?}"),
                })?,
                Err(_) => file.busy_timeout.unwrap_or(DEFAULT_BUSY_TIMEOUT_SECS),
            },
        };

        let default_status = match self.default_status {
            Some(status) => status,
            None => {
                let raw = env::var("AVIA_DEFAULT_STATUS")
                    .ok()
                    .or(file.default_status);
                match raw {
                    Some(value) => value.parse()?,
                    None => ReservationStatus::Waitlisted,
                }
            }
        };

        Ok(Config {
            data_dir,
            busy_timeout: Duration::from_secs(busy_timeout),
            default_status,
        })
    }
}
