//! CRUD operations for entities, reservations, and report queries.
//!
//! This module implements the database operations for all record types.
//! Insert and lookup functions take a plain connection reference so they
//! can run inside a caller-owned transaction; the plan executor wraps
//! every multi-step workflow in a single immediate transaction.

use rusqlite::{params, Connection, Row};

use crate::error::Result;
use crate::model::{
    Customer, Flight, Pilot, Plane, Repair, Reservation, ReservationStatus, Technician,
};

use super::connection::Database;

// SQL statements for entity inserts

const INSERT_PLANE: &str = r"
    INSERT INTO planes (id, make, model, age, seat_count)
    VALUES (?, ?, ?, ?, ?)
";

const INSERT_PILOT: &str = r"
    INSERT INTO pilots (id, full_name, nationality)
    VALUES (?, ?, ?)
";

const INSERT_TECHNICIAN: &str = r"
    INSERT INTO technicians (id, full_name)
    VALUES (?, ?)
";

const INSERT_FLIGHT: &str = r"
    INSERT INTO flights
    (flight_number, cost, seats_sold, stop_count, departure_date, arrival_date,
     departure_airport, arrival_airport)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const INSERT_FLIGHT_LINK: &str = r"
    INSERT INTO flight_links (link_id, flight_number, pilot_id, plane_id)
    VALUES (?, ?, ?, ?)
";

const INSERT_CUSTOMER: &str = r"
    INSERT INTO customers
    (id, first_name, last_name, gender_code, date_of_birth, address, phone, zip)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (reservation_number, customer_id, flight_number, status)
    VALUES (?, ?, ?, ?)
";

const INSERT_REPAIR: &str = r"
    INSERT INTO repairs (repair_id, repair_date, repair_code, plane_id, technician_id)
    VALUES (?, ?, ?, ?, ?)
";

// SQL statements for lookups and mutation

const SELECT_RESERVATION: &str = r"
    SELECT reservation_number, customer_id, flight_number, status
    FROM reservations
    WHERE customer_id = ? AND flight_number = ?
";

const UPDATE_RESERVATION_STATUS: &str = r"
    UPDATE reservations SET status = ? WHERE reservation_number = ?
";

// SQL statements for report queries

const SELECT_SEATS_AVAILABLE: &str = r"
    SELECT p.seat_count - f.seats_sold
    FROM flights f
    JOIN flight_links l ON l.flight_number = f.flight_number
    JOIN planes p ON p.id = l.plane_id
    WHERE f.flight_number = ?
";

const SELECT_REPAIRS_PER_PLANE: &str = r"
    SELECT plane_id, COUNT(*) AS repair_count
    FROM repairs
    GROUP BY plane_id
    ORDER BY repair_count DESC, plane_id ASC
";

const SELECT_REPAIRS_PER_YEAR: &str = r"
    SELECT CAST(strftime('%Y', repair_date) AS INTEGER) AS year, COUNT(*) AS repair_count
    FROM repairs
    GROUP BY year
    ORDER BY repair_count ASC, year ASC
";

const SELECT_PASSENGERS_BY_STATUS: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE flight_number = ? AND status = ?
";

/// Converts a database row to a [`Reservation`].
fn row_to_reservation(row: &Row) -> std::result::Result<Reservation, rusqlite::Error> {
    let reservation_number: i64 = row.get(0)?;
    let customer_id: i64 = row.get(1)?;
    let flight_number: i64 = row.get(2)?;
    let status_code: String = row.get(3)?;

    let status = status_code
        .parse::<ReservationStatus>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Reservation::new(reservation_number, customer_id, flight_number, status)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Returns whether a row with the given id exists in the table.
fn id_exists(conn: &Connection, table: &str, column: &str, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE {column} = ?");
    match conn.query_row(&sql, [id], |_| Ok(())) {
        Ok(()) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

impl Database {
    /// Inserts a plane row with a pre-allocated id.
    ///
    /// The caller is responsible for allocating the id and for holding a
    /// transaction that covers both the allocation and this insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_plane(conn: &Connection, id: i64, plane: &Plane) -> Result<()> {
        conn.execute(
            INSERT_PLANE,
            params![
                id,
                plane.make(),
                plane.model(),
                plane.age(),
                plane.seat_count(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a pilot row with a pre-allocated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_pilot(conn: &Connection, id: i64, pilot: &Pilot) -> Result<()> {
        conn.execute(
            INSERT_PILOT,
            params![id, pilot.full_name(), pilot.nationality()],
        )?;
        Ok(())
    }

    /// Inserts a technician row with a pre-allocated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_technician(conn: &Connection, id: i64, technician: &Technician) -> Result<()> {
        conn.execute(INSERT_TECHNICIAN, params![id, technician.full_name()])?;
        Ok(())
    }

    /// Inserts a flight row with a pre-allocated flight number.
    ///
    /// Dates are stored as `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_flight(conn: &Connection, flight_number: i64, flight: &Flight) -> Result<()> {
        conn.execute(
            INSERT_FLIGHT,
            params![
                flight_number,
                flight.cost(),
                flight.seats_sold(),
                flight.stop_count(),
                flight.departure_date().format("%Y-%m-%d").to_string(),
                flight.arrival_date().format("%Y-%m-%d").to_string(),
                flight.departure_airport(),
                flight.arrival_airport(),
            ],
        )?;
        Ok(())
    }

    /// Inserts the link row binding a flight to its pilot and plane.
    ///
    /// Each flight has exactly one link, written in the same transaction
    /// as the flight row itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when a link for
    /// the flight already exists.
    pub fn insert_flight_link(
        conn: &Connection,
        link_id: i64,
        flight_number: i64,
        pilot_id: i64,
        plane_id: i64,
    ) -> Result<()> {
        conn.execute(
            INSERT_FLIGHT_LINK,
            params![link_id, flight_number, pilot_id, plane_id],
        )?;
        Ok(())
    }

    /// Inserts a customer row.
    ///
    /// The customer id is caller-supplied, never allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the id is
    /// already taken.
    pub fn insert_customer(conn: &Connection, customer: &Customer) -> Result<()> {
        conn.execute(
            INSERT_CUSTOMER,
            params![
                customer.id(),
                customer.first_name(),
                customer.last_name(),
                customer.gender_code(),
                customer.date_of_birth().format("%Y-%m-%d").to_string(),
                customer.address(),
                customer.phone(),
                customer.zip(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a reservation row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the
    /// (customer, flight) pair already has a reservation.
    pub fn insert_reservation(conn: &Connection, reservation: &Reservation) -> Result<()> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.reservation_number(),
                reservation.customer_id(),
                reservation.flight_number(),
                reservation.status().code(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a repair row with a pre-allocated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_repair(conn: &Connection, repair_id: i64, repair: &Repair) -> Result<()> {
        conn.execute(
            INSERT_REPAIR,
            params![
                repair_id,
                repair.repair_date().format("%Y-%m-%d").to_string(),
                repair.repair_code(),
                repair.plane_id(),
                repair.technician_id(),
            ],
        )?;
        Ok(())
    }

    /// Retrieves a reservation by its (customer, flight) natural key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    /// - `Err(_)` if a database error occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/avia.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let reservation = Database::get_reservation(db.connection(), 7, 3).unwrap();
    /// ```
    pub fn get_reservation(
        conn: &Connection,
        customer_id: i64,
        flight_number: i64,
    ) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION)?;

        match stmt.query_row(params![customer_id, flight_number], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the status of an existing reservation.
    ///
    /// All transitions are legal; the previous status is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if no reservation has that number
    pub fn update_reservation_status(
        conn: &Connection,
        reservation_number: i64,
        status: ReservationStatus,
    ) -> Result<bool> {
        let rows_affected = conn.execute(
            UPDATE_RESERVATION_STATUS,
            params![status.code(), reservation_number],
        )?;
        Ok(rows_affected > 0)
    }

    /// Returns whether a plane with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn plane_exists(conn: &Connection, id: i64) -> Result<bool> {
        id_exists(conn, "planes", "id", id)
    }

    /// Returns whether a pilot with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn pilot_exists(conn: &Connection, id: i64) -> Result<bool> {
        id_exists(conn, "pilots", "id", id)
    }

    /// Returns whether a technician with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn technician_exists(conn: &Connection, id: i64) -> Result<bool> {
        id_exists(conn, "technicians", "id", id)
    }

    /// Returns whether a customer with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn customer_exists(conn: &Connection, id: i64) -> Result<bool> {
        id_exists(conn, "customers", "id", id)
    }

    /// Returns whether a flight with the given number exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn flight_exists(conn: &Connection, flight_number: i64) -> Result<bool> {
        id_exists(conn, "flights", "flight_number", flight_number)
    }

    /// Computes the seats still available on a flight.
    ///
    /// The result is the linked plane's seat count minus the flight's
    /// sold-seat counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(count))` for a flight with a link
    /// - `Ok(None)` if the flight (or its link) doesn't exist
    pub fn seats_available(conn: &Connection, flight_number: i64) -> Result<Option<i64>> {
        match conn.query_row(SELECT_SEATS_AVAILABLE, [flight_number], |row| row.get(0)) {
            Ok(count) => Ok(Some(count)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Counts repairs grouped by plane, most-repaired first.
    ///
    /// Planes with no repairs do not appear. Ties are broken by plane id
    /// so the ordering is deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn repairs_per_plane(conn: &Connection) -> Result<Vec<(i64, i64)>> {
        let mut stmt = conn.prepare(SELECT_REPAIRS_PER_PLANE)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rows)
    }

    /// Counts repairs grouped by calendar year, least-repaired first.
    ///
    /// The year is extracted from the stored `YYYY-MM-DD` text. Ties are
    /// broken by year so the ordering is deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn repairs_per_year(conn: &Connection) -> Result<Vec<(i64, i64)>> {
        let mut stmt = conn.prepare(SELECT_REPAIRS_PER_YEAR)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rows)
    }

    /// Counts reservations on a flight with the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn passengers_by_status(
        conn: &Connection,
        flight_number: i64,
        status: ReservationStatus,
    ) -> Result<i64> {
        let count = conn.query_row(
            SELECT_PASSENGERS_BY_STATUS,
            params![flight_number, status.code()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
