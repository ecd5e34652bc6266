//! Database layer for persistent storage of operational records.
//!
//! This module provides a SQLite-based storage layer for planes, pilots,
//! technicians, flights, customers, reservations, and repairs, including
//! connection management, schema versioning, identifier allocation, and
//! CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use avia::database::{Database, DatabaseConfig};
//! use avia::{Reservation, ReservationStatus};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/avia.db");
//! let db = Database::open(config).unwrap();
//!
//! // Look up a reservation by its (customer, flight) pair
//! let reservation = Database::get_reservation(db.connection(), 7, 3).unwrap();
//! if let Some(r) = reservation {
//!     println!("{:?}", r.status());
//! }
//! ```

pub mod allocator;
mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub mod test_util;

// Re-export public API
pub use allocator::{next_id, EntityKind};
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
