//! Connection lifecycle for the record store.
//!
//! Opening a database applies the PRAGMA set every other layer assumes:
//! WAL journaling, NORMAL synchronous, and the configured busy timeout.

use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open handle on the `SQLite` record store.
///
/// # Examples
///
/// ```no_run
/// use avia::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

fn open_flags(config: &DatabaseConfig) -> OpenFlags {
    let base = OpenFlags::SQLITE_OPEN_NO_MUTEX;
    if config.read_only {
        base | OpenFlags::SQLITE_OPEN_READ_ONLY
    } else if config.auto_create {
        base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
    } else {
        base | OpenFlags::SQLITE_OPEN_READ_WRITE
    }
}

fn apply_pragmas(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    // journal_mode is a query, not a statement: it reports the resulting mode
    let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.execute_batch("PRAGMA synchronous = NORMAL")?;
    conn.execute_batch(&format!("PRAGMA busy_timeout = {}", busy_timeout.as_millis()))?;
    Ok(())
}

impl Database {
    /// Opens the store described by `config`.
    ///
    /// With `auto_create` set, the parent directory and database file are
    /// created on demand. The schema is verified (and installed on a fresh
    /// file) before the handle is returned, so a successfully opened
    /// `Database` is always usable.
    ///
    /// # Errors
    ///
    /// Fails when the file or its parent directory cannot be created or
    /// opened, when a PRAGMA cannot be applied, or when the on-disk schema
    /// is newer than this build understands.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
    /// ```
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(&config.path, open_flags(&config))?;
        apply_pragmas(&conn, config.busy_timeout)?;
        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// Borrows the underlying connection for queries.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
    /// let conn = db.connection();
    /// ```
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Borrows the connection mutably, as transactions require.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Returns the configured busy timeout.
    ///
    /// Used to report how long a lock was waited on when a busy error
    /// surfaces from the storage layer.
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        self.config.busy_timeout
    }
}
