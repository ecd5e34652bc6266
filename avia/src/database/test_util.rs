//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::model::parse_date;
use crate::{Customer, Flight, Pilot, Plane};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test plane with fixed make and model.
///
/// # Panics
///
/// Panics if validation fails, which cannot happen for these inputs.
#[must_use]
pub fn create_test_plane(seat_count: i64) -> Plane {
    Plane::new("Boeing", "737", 4, seat_count).unwrap()
}

/// Creates a test pilot with a fixed nationality.
///
/// # Panics
///
/// Panics if validation fails, which cannot happen for these inputs.
#[must_use]
pub fn create_test_pilot(full_name: &str) -> Pilot {
    Pilot::new(full_name, "US").unwrap()
}

/// Creates a test flight with fixed airports and dates.
///
/// # Panics
///
/// Panics if validation fails, which cannot happen for these inputs.
#[must_use]
pub fn create_test_flight(cost: i64, seats_sold: i64) -> Flight {
    Flight::new(
        cost,
        seats_sold,
        0,
        parse_date("2024-03-01").unwrap(),
        parse_date("2024-03-02").unwrap(),
        "KSFOX",
        "KJFKX",
    )
    .unwrap()
}

/// Creates a test customer with the given id.
///
/// # Panics
///
/// Panics if validation fails, which cannot happen for these inputs.
#[must_use]
pub fn create_test_customer(id: i64) -> Customer {
    Customer::new(
        id,
        "Ada",
        "Lovelace",
        "F",
        parse_date("1985-07-20").unwrap(),
        "12 Analytical Way",
        "5551234567",
        "94040",
    )
    .unwrap()
}
