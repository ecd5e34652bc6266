//! Explicit data-directory setup.
//!
//! Normal commands create the store on demand; this module backs the
//! `init` subcommand, which sets the directory up deliberately, can
//! replace an existing store, and can drop in a starter config file.

use std::fs;
use std::path::PathBuf;

use crate::config::{CONFIG_FILE, DATABASE_FILE};
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// What `init` should set up.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory to hold the store and config file.
    pub data_dir: PathBuf,
    /// Replace a store file that is already there.
    pub overwrite: bool,
    /// Also write a starter config file.
    pub create_config: bool,
}

impl InitOptions {
    /// Options that create the directory and store, nothing more.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Chooses whether an existing store file gets replaced.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Chooses whether a starter config file gets written.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What `init` actually did, for the caller's report.
#[derive(Debug)]
pub struct InitResult {
    /// True when the directory had to be created.
    pub data_dir_created: bool,
    /// True when the store file was written (fresh or replaced).
    pub database_created: bool,
    /// True when a starter config file was written.
    pub config_created: bool,
    /// The directory everything went into.
    pub data_dir: PathBuf,
}

/// Starter config with every setting commented out.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Avia Configuration File
# All settings are optional; uncomment to override the defaults.

# Data directory override (only honored when no flag or environment
# variable picked the directory)
# data_dir: /var/lib/avia

# Seconds to wait for the database lock (default: 5)
# busy_timeout: 5

# Default reservation status for bookings: W, R, or C (default: W)
# default_status: W
";

/// Sets up the data directory: the directory itself, a schema-stamped
/// store file, and optionally a starter config.
///
/// # Errors
///
/// Fails when a store file is already present without `overwrite`, or
/// when any of the directory, store, or config writes fail.
///
/// # Examples
///
/// ```no_run
/// use avia::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/avia-data"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Pass --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists && options.overwrite {
        fs::remove_file(&db_path)?;
    }

    // Opening with auto_create applies the schema
    let db_config = DatabaseConfig::new(&db_path);
    let _db = Database::open(db_config)?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE);

        // Never clobber an existing config
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
