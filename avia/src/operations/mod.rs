//! Record-keeping operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for write operations,
//! separating planning from execution to enable dry-run mode, better
//! testing, and clear error messages. Read-only reports live in
//! [`reports`] and bypass planning entirely.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates constraints, builds a plan
//! 2. **Execution**: Takes the plan and performs actual database operations
//!
//! All identifier allocation happens during execution, inside the same
//! transaction as the inserts that consume the identifiers.
//!
//! # Examples
//!
//! ```no_run
//! use avia::operations::{BookFlightOptions, BookingPlan, PlanExecutor};
//! use avia::database::{Database, DatabaseConfig};
//! use avia::ReservationStatus;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
//!
//! let options = BookFlightOptions::new(7, 3, ReservationStatus::Confirmed);
//!
//! // Generate plan
//! let plan = BookingPlan::new(options).build_plan(&db).unwrap();
//!
//! // Execute plan
//! let mut executor = PlanExecutor::new(&mut db);
//! let result = executor.execute(&plan).unwrap();
//! assert!(result.success);
//! ```

pub mod book;
pub mod executor;
pub mod flight;
pub mod init;
pub mod plan;
pub mod provision;
pub mod repair;
pub mod reports;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use book::{BookFlightOptions, BookingPlan, NewCustomerOptions};
pub use executor::{ExecutionResult, PlanExecutor};
pub use flight::{AddFlightOptions, FlightPlan};
pub use plan::{OperationPlan, PlanAction};
pub use provision::{AddPilotOptions, AddPlaneOptions, AddTechnicianOptions, ProvisionPlan};
pub use repair::{RecordRepairOptions, RepairPlan};
