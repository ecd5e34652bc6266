//! Applies plans to the store.
//!
//! Every action in a plan runs inside one immediate transaction, so
//! identifier allocation and the inserts that consume those
//! identifiers cannot interleave with another session.

use rusqlite::{Connection, ErrorCode, TransactionBehavior};

use crate::database::allocator::{next_id, EntityKind};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::{Reservation, ReservationStatus};

use super::plan::{OperationPlan, PlanAction};

/// What came out of running (or dry-running) a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// True when every action landed.
    pub success: bool,

    /// True when the store was left untouched.
    pub dry_run: bool,

    /// One rendered line per action, in plan order.
    pub actions_taken: Vec<String>,

    /// Warnings carried over from planning.
    pub warnings: Vec<String>,

    /// The identifier allocated for the last created record, if any.
    ///
    /// For a booking plan this is the reservation number; for entity
    /// plans it is the new entity's id; for a flight plan it is the
    /// flight number.
    pub entity_id: Option<i64>,

    /// The reservation status stored by the last reservation action.
    pub status: Option<ReservationStatus>,
}

impl ExecutionResult {
    /// A committed run's result.
    fn success(plan: &OperationPlan, entity_id: Option<i64>, status: Option<ReservationStatus>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            entity_id,
            status,
        }
    }

    /// A dry-run's result, with no allocated id to report.
    fn dry_run(plan: &OperationPlan, status: Option<ReservationStatus>) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            entity_id: None,
            status,
        }
    }
}

/// Runs plans against a store handle.
///
/// By default the executor commits; [`PlanExecutor::dry_run`] turns it
/// into a reporter that leaves the store untouched.
///
/// # Examples
///
/// ```no_run
/// use avia::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use avia::database::{Database, DatabaseConfig};
/// use avia::Plane;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
/// let plane = Plane::new("Boeing", "737", 4, 180).unwrap();
/// let plan = OperationPlan::new("Add plane").add_action(PlanAction::CreatePlane(plane));
///
/// let committed = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// assert!(committed.success);
///
/// let previewed = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
/// assert!(previewed.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// A committing executor over the given handle.
    #[must_use]
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Switches the executor to reporting without writing.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Runs the plan: all actions in one immediate transaction, or a
    /// report of what would run when in dry-run mode. Either every
    /// action lands or none do.
    ///
    /// # Errors
    ///
    /// Returns the first action's failure. A store that stayed locked
    /// past the configured busy timeout surfaces as
    /// [`Error::LockTimeout`].
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!(
                "Dry-run of plan '{}' ({} actions)",
                plan.description,
                plan.actions.len()
            );
            // In dry-run mode, derive the reported status from the plan
            // alone, without touching the database.
            let status = Self::status_from_plan(plan);
            return Ok(ExecutionResult::dry_run(plan, status));
        }

        log::debug!(
            "Executing plan '{}' ({} actions)",
            plan.description,
            plan.actions.len()
        );
        let busy_seconds = self.db.busy_timeout().as_secs();
        Self::apply(self.db.connection_mut(), plan)
            .map_err(|e| Self::map_busy_error(e, busy_seconds))
    }

    /// Applies all plan actions inside one immediate transaction.
    ///
    /// Identifiers are allocated immediately before the insert that
    /// consumes them, under the same write lock, so concurrent sessions
    /// cannot observe or reuse an allocated value.
    fn apply(conn: &mut Connection, plan: &OperationPlan) -> Result<ExecutionResult> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut entity_id = None;
        let mut status = None;
        // The flight number allocated by a CreateFlight action, consumed
        // by a later CreateReservation with no explicit flight number.
        let mut created_flight = None;

        for action in &plan.actions {
            match action {
                PlanAction::CreatePlane(plane) => {
                    let id = next_id(&tx, EntityKind::Plane)?;
                    Database::insert_plane(&tx, id, plane)?;
                    entity_id = Some(id);
                }
                PlanAction::CreatePilot(pilot) => {
                    let id = next_id(&tx, EntityKind::Pilot)?;
                    Database::insert_pilot(&tx, id, pilot)?;
                    entity_id = Some(id);
                }
                PlanAction::CreateTechnician(technician) => {
                    let id = next_id(&tx, EntityKind::Technician)?;
                    Database::insert_technician(&tx, id, technician)?;
                    entity_id = Some(id);
                }
                PlanAction::CreateFlight {
                    flight,
                    pilot_id,
                    plane_id,
                } => {
                    let flight_number = next_id(&tx, EntityKind::Flight)?;
                    Database::insert_flight(&tx, flight_number, flight)?;
                    let link_id = next_id(&tx, EntityKind::FlightLink)?;
                    Database::insert_flight_link(&tx, link_id, flight_number, *pilot_id, *plane_id)?;
                    created_flight = Some(flight_number);
                    entity_id = Some(flight_number);
                }
                PlanAction::CreateCustomer(customer) => {
                    Database::insert_customer(&tx, customer)?;
                }
                PlanAction::CreateReservation {
                    customer_id,
                    flight_number,
                    status: reservation_status,
                } => {
                    let flight_number =
                        flight_number.or(created_flight).ok_or_else(|| Error::Validation {
                            field: "flight_number".into(),
                            message:
                                "reservation refers to a flight created earlier in the plan, \
                                 but the plan creates no flight"
                                    .into(),
                        })?;
                    let reservation_number = next_id(&tx, EntityKind::Reservation)?;
                    let reservation = Reservation::new(
                        reservation_number,
                        *customer_id,
                        flight_number,
                        *reservation_status,
                    )?;
                    Database::insert_reservation(&tx, &reservation)?;
                    entity_id = Some(reservation_number);
                    status = Some(*reservation_status);
                }
                PlanAction::UpdateReservationStatus {
                    reservation_number,
                    status: reservation_status,
                } => {
                    let updated = Database::update_reservation_status(
                        &tx,
                        *reservation_number,
                        *reservation_status,
                    )?;
                    if !updated {
                        return Err(Error::NotFound {
                            resource: format!("reservation {reservation_number}"),
                        });
                    }
                    entity_id = Some(*reservation_number);
                    status = Some(*reservation_status);
                }
                PlanAction::RecordRepair(repair) => {
                    let id = next_id(&tx, EntityKind::Repair)?;
                    Database::insert_repair(&tx, id, repair)?;
                    entity_id = Some(id);
                }
            }
        }

        tx.commit()?;

        Ok(ExecutionResult::success(plan, entity_id, status))
    }

    /// Translates a busy-database failure into a lock timeout error.
    ///
    /// SQLite reports an exhausted busy timeout as a generic busy error;
    /// callers see it as a timeout carrying the configured wait.
    fn map_busy_error(error: Error, busy_seconds: u64) -> Error {
        match error {
            Error::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::DatabaseBusy =>
            {
                Error::LockTimeout {
                    seconds: busy_seconds,
                }
            }
            other => other,
        }
    }

    /// Derives the reported status from the plan's reservation actions.
    ///
    /// The last reservation action wins, matching what execution would
    /// store.
    fn status_from_plan(plan: &OperationPlan) -> Option<ReservationStatus> {
        plan.actions.iter().rev().find_map(|action| match action {
            PlanAction::CreateReservation { status, .. }
            | PlanAction::UpdateReservationStatus { status, .. } => Some(*status),
            _ => None,
        })
    }
}
