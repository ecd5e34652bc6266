//! Shared database test utilities.

use std::path::Path;

use avia::database::{Database, DatabaseConfig};
use avia::operations::{
    AddFlightOptions, AddPilotOptions, AddPlaneOptions, AddTechnicianOptions, FlightPlan,
    PlanExecutor, ProvisionPlan,
};

use super::CustomerFixture;

/// Creates a temporary test database that will be cleaned up when dropped.
///
/// Returns the database instance. The temporary directory is tied to the
/// database's lifetime through the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Opens a database at the given path with default settings.
#[allow(dead_code)]
pub fn open_database_at(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Provisions pilot 1, a 180-seat plane 1, and flight 1 with 10 seats sold.
#[allow(dead_code)]
pub fn seed_flight(db: &mut Database) {
    let pilot = ProvisionPlan::pilot(AddPilotOptions::new("Amelia Earhart", "US"))
        .build_plan()
        .unwrap();
    PlanExecutor::new(db).execute(&pilot).unwrap();

    let plane = ProvisionPlan::plane(AddPlaneOptions::new("Boeing", "737", 4, 180))
        .build_plan()
        .unwrap();
    PlanExecutor::new(db).execute(&plane).unwrap();

    let options =
        AddFlightOptions::new(250, 10, 0, "2024-03-01", "2024-03-02", "KSFOX", "KJFKX", 1, 1);
    let plan = FlightPlan::new(options).build_plan(db).unwrap();
    PlanExecutor::new(db).execute(&plan).unwrap();
}

/// Provisions technician 1.
#[allow(dead_code)]
pub fn seed_technician(db: &mut Database) {
    let plan = ProvisionPlan::technician(AddTechnicianOptions::new("Wilbur Wright"))
        .build_plan()
        .unwrap();
    PlanExecutor::new(db).execute(&plan).unwrap();
}

/// Inserts a fixture customer under the given id.
#[allow(dead_code)]
pub fn insert_customer(db: &Database, id: i64) {
    Database::insert_customer(db.connection(), &CustomerFixture::new(id).build()).unwrap();
}
