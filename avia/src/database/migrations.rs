//! Schema installation and version gating.
//!
//! A fresh file gets the full schema; an existing file is accepted only
//! when its stamped version matches this build.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CUSTOMERS_TABLE, CREATE_FLIGHTS_TABLE, CREATE_FLIGHT_LINKS_TABLE,
    CREATE_METADATA_TABLE, CREATE_PILOTS_TABLE, CREATE_PLANES_TABLE, CREATE_REPAIRS_TABLE,
    CREATE_REPAIR_PLANE_INDEX, CREATE_RESERVATIONS_TABLE, CREATE_RESERVATION_FLIGHT_INDEX,
    CREATE_TECHNICIANS_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

/// Installs every table and index on a fresh database.
///
/// Call only on an empty file; the version stamp written at the end is
/// what marks the database as initialized.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use avia::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let statements = [
        CREATE_METADATA_TABLE,
        CREATE_PLANES_TABLE,
        CREATE_PILOTS_TABLE,
        CREATE_TECHNICIANS_TABLE,
        CREATE_FLIGHTS_TABLE,
        CREATE_FLIGHT_LINKS_TABLE,
        CREATE_CUSTOMERS_TABLE,
        CREATE_RESERVATIONS_TABLE,
        CREATE_REPAIRS_TABLE,
        CREATE_RESERVATION_FLIGHT_INDEX,
        CREATE_REPAIR_PLANE_INDEX,
    ];
    for statement in statements {
        conn.execute(statement, [])?;
    }

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Reads the stamped schema version, with 0 meaning "no schema yet".
///
/// A missing metadata table and a missing version row both report 0,
/// which callers treat as a fresh database.
///
/// # Errors
///
/// Returns an error for any database failure other than the
/// missing-table and missing-row cases above.
pub fn get_schema_version(conn: &Connection) -> Result<u32> {
    let queried = conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<u32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    });

    match queried {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(ref sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::Unknown =>
        {
            // no such table
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Admits a database handle: installs the schema on a fresh file,
/// accepts a matching version, and rejects everything else.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] when the stamp differs
/// from this build's version, or any error from installation itself.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use avia::database::migrations::check_schema_compatibility;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
/// ```
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => initialize_schema(conn),
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}
