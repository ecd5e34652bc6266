//! The store's DDL, collected as string constants.
//!
//! Migrations execute these in order; nothing else in the crate writes
//! raw DDL.

/// Schema version this build installs and accepts.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key-value table holding the schema version stamp.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Fleet roster.
pub const CREATE_PLANES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS planes (
        id INTEGER PRIMARY KEY,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        age INTEGER NOT NULL,
        seat_count INTEGER NOT NULL
    )";

/// Pilot roster.
pub const CREATE_PILOTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS pilots (
        id INTEGER PRIMARY KEY,
        full_name TEXT NOT NULL,
        nationality TEXT NOT NULL
    )";

/// Maintenance technician roster.
pub const CREATE_TECHNICIANS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS technicians (
        id INTEGER PRIMARY KEY,
        full_name TEXT NOT NULL
    )";

/// Scheduled flights.
///
/// Dates are stored as `YYYY-MM-DD` text, which sorts chronologically and
/// supports `strftime` extraction in the report queries.
pub const CREATE_FLIGHTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS flights (
        flight_number INTEGER PRIMARY KEY,
        cost INTEGER NOT NULL,
        seats_sold INTEGER NOT NULL,
        stop_count INTEGER NOT NULL,
        departure_date TEXT NOT NULL,
        arrival_date TEXT NOT NULL,
        departure_airport TEXT NOT NULL,
        arrival_airport TEXT NOT NULL
    )";

/// Crew and equipment assignment per flight.
///
/// Each flight has exactly one link to its (pilot, plane) pair, enforced
/// by the UNIQUE constraint on `flight_number`. The link row is written in
/// the same transaction as its flight.
pub const CREATE_FLIGHT_LINKS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS flight_links (
        link_id INTEGER PRIMARY KEY,
        flight_number INTEGER NOT NULL UNIQUE REFERENCES flights(flight_number),
        pilot_id INTEGER NOT NULL REFERENCES pilots(id),
        plane_id INTEGER NOT NULL REFERENCES planes(id)
    )";

/// Customer records.
///
/// Customer ids are caller-supplied lookup keys, never allocated.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        gender_code TEXT NOT NULL,
        date_of_birth TEXT NOT NULL,
        address TEXT NOT NULL,
        phone TEXT NOT NULL,
        zip TEXT NOT NULL
    )";

/// Bookings.
///
/// The UNIQUE constraint on (`customer_id`, `flight_number`) enforces the
/// at-most-one-reservation-per-pair invariant; the booking workflow treats
/// that pair as the natural key and the reservation number as a surrogate.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        reservation_number INTEGER PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers(id),
        flight_number INTEGER NOT NULL REFERENCES flights(flight_number),
        status TEXT NOT NULL CHECK (status IN ('W', 'R', 'C')),
        UNIQUE (customer_id, flight_number)
    )";

/// Maintenance history.
pub const CREATE_REPAIRS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS repairs (
        repair_id INTEGER PRIMARY KEY,
        repair_date TEXT NOT NULL,
        repair_code TEXT NOT NULL,
        plane_id INTEGER NOT NULL REFERENCES planes(id),
        technician_id INTEGER NOT NULL REFERENCES technicians(id)
    )";

/// Index backing passenger counts filtered by flight and status.
pub const CREATE_RESERVATION_FLIGHT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_flight ON reservations(flight_number, status)";

/// Index backing the per-plane repair report.
pub const CREATE_REPAIR_PLANE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_repairs_plane ON repairs(plane_id)";

/// Reads the version stamp.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes (or replaces) the version stamp.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
