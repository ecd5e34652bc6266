//! Read-only reporting queries.
//!
//! Reports validate operator input before touching the store and return
//! plain values for the caller to render. They never modify the database
//! and run outside the plan-execute machinery.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::parse_date;
use crate::ReservationStatus;

/// Returns the number of unsold seats on a flight.
///
/// The result is the linked plane's seat count minus the flight's sold
/// seats. The date is validated as operator input; availability is keyed
/// by the flight number alone.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] for an unparseable date (checked before
/// any store access) and [`Error::NotFound`] for an unknown flight.
///
/// # Examples
///
/// ```no_run
/// use avia::database::{Database, DatabaseConfig};
/// use avia::operations::reports;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
/// let seats = reports::seats_available(&db, 3, "2024-06-01").unwrap();
/// println!("{seats}");
/// ```
pub fn seats_available(db: &Database, flight_number: i64, date: &str) -> Result<i64> {
    parse_date(date)?;
    Database::seats_available(db.connection(), flight_number)?.ok_or_else(|| Error::NotFound {
        resource: format!("flight {flight_number}"),
    })
}

/// Returns repair counts per plane, busiest plane first.
///
/// Planes with equal counts are ordered by plane id ascending. Planes with
/// no repairs do not appear.
///
/// # Errors
///
/// Returns [`Error::Database`] if the query fails.
pub fn repairs_per_plane(db: &Database) -> Result<Vec<(i64, i64)>> {
    Database::repairs_per_plane(db.connection())
}

/// Returns repair counts per calendar year, quietest year first.
///
/// Years with equal counts are ordered by year ascending. Years with no
/// repairs do not appear.
///
/// # Errors
///
/// Returns [`Error::Database`] if the query fails.
pub fn repairs_per_year(db: &Database) -> Result<Vec<(i64, i64)>> {
    Database::repairs_per_year(db.connection())
}

/// Returns the number of reservations on a flight holding the given status.
///
/// The status letter is validated before any store access. An unknown
/// flight simply has no reservations and counts as zero.
///
/// # Errors
///
/// Returns [`Error::InvalidStatus`] for an unrecognized status letter and
/// [`Error::Database`] if the query fails.
///
/// # Examples
///
/// ```no_run
/// use avia::database::{Database, DatabaseConfig};
/// use avia::operations::reports;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
/// let confirmed = reports::passengers_by_status(&db, "C", 3).unwrap();
/// println!("{confirmed}");
/// ```
pub fn passengers_by_status(db: &Database, status: &str, flight_number: i64) -> Result<i64> {
    let status: ReservationStatus = status.parse()?;
    Database::passengers_by_status(db.connection(), flight_number, status)
}
