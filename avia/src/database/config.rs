//! Open-time parameters for the record store.
//!
//! [`DatabaseConfig`] gathers everything [`Database::open`] needs to
//! know up front, and the free functions here decide where the store
//! file lives on disk.
//!
//! [`Database::open`]: super::Database::open

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::DATABASE_FILE;
use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
const DATA_DIR_VAR: &str = "AVIA_DATA_DIR";

/// How a store file should be opened.
///
/// Built with [`DatabaseConfig::new`] and refined with the builder
/// methods before being handed to [`Database::open`].
///
/// [`Database::open`]: super::Database::open
///
/// # Examples
///
/// ```
/// use avia::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/avia.db")
///     .with_busy_timeout(Duration::from_secs(30));
/// assert_eq!(config.busy_timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Location of the store file on disk.
    pub path: PathBuf,
    /// How long a handle waits on another writer's lock before
    /// giving up.
    pub busy_timeout: Duration,
    /// Create the file (and its parent directory) when missing.
    pub auto_create: bool,
    /// Refuse writes through this handle.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// A writable configuration for the given path.
    ///
    /// Starts with a five second busy timeout and `auto_create` on.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/avia.db");
    /// assert!(config.auto_create);
    /// assert!(!config.read_only);
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(5),
            auto_create: true,
            read_only: false,
        }
    }

    /// Overrides how long to wait on a locked store.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::database::DatabaseConfig;
    /// use std::time::Duration;
    ///
    /// let config = DatabaseConfig::new("/tmp/avia.db")
    ///     .with_busy_timeout(Duration::from_secs(10));
    /// assert_eq!(config.busy_timeout, Duration::from_secs(10));
    /// ```
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Switches the handle to read-only.
    ///
    /// Read-only implies no auto-creation, so this clears
    /// `auto_create` as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/avia.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// The per-user data directory, `~/.avia`.
///
/// # Errors
///
/// Fails when no home directory can be determined for the current
/// user.
///
/// # Examples
///
/// ```no_run
/// use avia::database::default_data_dir;
///
/// let dir = default_data_dir().unwrap();
/// assert!(dir.ends_with(".avia"));
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".avia"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Where the store file lives, honoring `AVIA_DATA_DIR`.
///
/// With the variable set, the file sits directly under that
/// directory; otherwise it sits under [`default_data_dir`].
///
/// # Errors
///
/// Fails when the variable is unset and no home directory can be
/// determined.
///
/// # Examples
///
/// ```no_run
/// use avia::database::resolve_database_path;
///
/// let path = resolve_database_path().unwrap();
/// assert!(path.ends_with("avia.db"));
/// ```
pub fn resolve_database_path() -> Result<PathBuf> {
    let dir = match std::env::var(DATA_DIR_VAR) {
        Ok(data_dir) => PathBuf::from(data_dir),
        Err(_) => default_data_dir()?,
    };
    Ok(dir.join(DATABASE_FILE))
}
