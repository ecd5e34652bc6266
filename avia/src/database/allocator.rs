//! Sequential identifier allocation for entity tables.
//!
//! Every store-assigned identifier is allocated by scanning the owning
//! table for its current maximum and adding one, with the first id in an
//! empty table pinned to 1. Allocation is only race-free when performed
//! inside the same immediate transaction as the insert that consumes the
//! id, which is how the plan executor drives it.

use rusqlite::Connection;

use crate::error::{Error, Result};

/// The entity tables whose identifiers are allocated by the store.
///
/// Customers are absent: their ids are caller-supplied lookup keys and
/// are never allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Planes, keyed by `id`.
    Plane,
    /// Pilots, keyed by `id`.
    Pilot,
    /// Technicians, keyed by `id`.
    Technician,
    /// Flights, keyed by `flight_number`.
    Flight,
    /// Flight links, keyed by `link_id`.
    FlightLink,
    /// Reservations, keyed by `reservation_number`.
    Reservation,
    /// Repairs, keyed by `repair_id`.
    Repair,
}

impl EntityKind {
    /// Returns the table this kind allocates from.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Plane => "planes",
            Self::Pilot => "pilots",
            Self::Technician => "technicians",
            Self::Flight => "flights",
            Self::FlightLink => "flight_links",
            Self::Reservation => "reservations",
            Self::Repair => "repairs",
        }
    }

    /// Returns the primary key column of the table.
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Plane | Self::Pilot | Self::Technician => "id",
            Self::Flight => "flight_number",
            Self::FlightLink => "link_id",
            Self::Reservation => "reservation_number",
            Self::Repair => "repair_id",
        }
    }

    /// Returns a human-readable entity name for error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Pilot => "pilot",
            Self::Technician => "technician",
            Self::Flight => "flight",
            Self::FlightLink => "flight link",
            Self::Reservation => "reservation",
            Self::Repair => "repair",
        }
    }
}

/// Allocates the next identifier for an entity table.
///
/// Returns `max(id) + 1`, or 1 for an empty table. The caller must hold
/// a write transaction covering both this query and the insert that uses
/// the returned id, otherwise two sessions can allocate the same value.
///
/// # Errors
///
/// Returns [`Error::Allocation`] if the scan fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use avia::database::allocator::{next_id, EntityKind};
/// use avia::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(next_id(&conn, EntityKind::Plane).unwrap(), 1);
/// ```
pub fn next_id(conn: &Connection, kind: EntityKind) -> Result<i64> {
    let sql = format!(
        "SELECT COALESCE(MAX({column}), 0) + 1 FROM {table}",
        column = kind.id_column(),
        table = kind.table(),
    );
    conn.query_row(&sql, [], |row| row.get(0))
        .map_err(|e| Error::Allocation {
            entity: kind.name().to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::migrations::initialize_schema;

    fn memory_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_first_id_is_one() {
        let conn = memory_conn();
        for kind in [
            EntityKind::Plane,
            EntityKind::Pilot,
            EntityKind::Technician,
            EntityKind::Flight,
            EntityKind::FlightLink,
            EntityKind::Reservation,
            EntityKind::Repair,
        ] {
            assert_eq!(next_id(&conn, kind).unwrap(), 1, "{}", kind.name());
        }
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO planes (id, make, model, age, seat_count) VALUES (5, 'Boeing', '737', 4, 180)",
            [],
        )
        .unwrap();

        assert_eq!(next_id(&conn, EntityKind::Plane).unwrap(), 6);
    }

    #[test]
    fn test_next_id_ignores_gaps() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO pilots (id, full_name, nationality) VALUES (1, 'Amelia Earhart', 'US')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO pilots (id, full_name, nationality) VALUES (9, 'Bessie Coleman', 'US')",
            [],
        )
        .unwrap();

        // Allocation never reuses a freed or skipped id below the maximum
        assert_eq!(next_id(&conn, EntityKind::Pilot).unwrap(), 10);
    }

    #[test]
    fn test_allocation_per_table_is_independent() {
        let conn = memory_conn();
        conn.execute(
            "INSERT INTO planes (id, make, model, age, seat_count) VALUES (3, 'Airbus', 'A320', 2, 150)",
            [],
        )
        .unwrap();

        assert_eq!(next_id(&conn, EntityKind::Plane).unwrap(), 4);
        assert_eq!(next_id(&conn, EntityKind::Pilot).unwrap(), 1);
    }

    #[test]
    fn test_allocation_error_names_entity() {
        // A connection without the schema produces an allocation failure
        let conn = Connection::open_in_memory().unwrap();
        let err = next_id(&conn, EntityKind::Flight).unwrap_err();
        assert!(matches!(err, Error::Allocation { .. }));
        assert!(err.to_string().contains("flight"));
    }
}
