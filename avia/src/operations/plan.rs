//! Plan types for record-keeping operations.
//!
//! A plan describes the writes an operation intends to make without
//! touching the store. Planners produce them; the executor applies them.

use crate::{Customer, Flight, Pilot, Plane, Repair, ReservationStatus, Technician};

/// One write the executor will perform.
///
/// Actions that create store-keyed entities carry no id: the executor
/// allocates one inside the same transaction as the insert.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Insert a new plane with an allocated id.
    CreatePlane(Plane),

    /// Insert a new pilot with an allocated id.
    CreatePilot(Pilot),

    /// Insert a new technician with an allocated id.
    CreateTechnician(Technician),

    /// Insert a new flight with an allocated number, plus its link row
    /// binding the given pilot and plane.
    CreateFlight {
        /// The validated flight attributes.
        flight: Flight,
        /// The pilot assigned to the flight.
        pilot_id: i64,
        /// The plane assigned to the flight.
        plane_id: i64,
    },

    /// Insert a new customer under its caller-supplied id.
    CreateCustomer(Customer),

    /// Insert a new reservation with an allocated reservation number.
    ///
    /// `flight_number` is `None` when the flight is created earlier in
    /// the same plan; the executor substitutes the number it allocated
    /// for that flight.
    CreateReservation {
        /// The booking customer's id.
        customer_id: i64,
        /// The booked flight, or `None` for a flight created by a
        /// preceding action in this plan.
        flight_number: Option<i64>,
        /// The initial reservation status.
        status: ReservationStatus,
    },

    /// Overwrite the status of an existing reservation.
    UpdateReservationStatus {
        /// The reservation's surrogate number.
        reservation_number: i64,
        /// The status to store.
        status: ReservationStatus,
    },

    /// Insert a new repair record with an allocated id.
    RecordRepair(Repair),
}

impl PlanAction {
    /// Renders the action as one line of dry-run output.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreatePlane(plane) => {
                format!("Add plane {} {}", plane.make(), plane.model())
            }
            Self::CreatePilot(pilot) => {
                format!("Add pilot {}", pilot.full_name())
            }
            Self::CreateTechnician(technician) => {
                format!("Add technician {}", technician.full_name())
            }
            Self::CreateFlight {
                flight,
                pilot_id,
                plane_id,
            } => {
                format!(
                    "Add flight {} -> {} with pilot {pilot_id} and plane {plane_id}",
                    flight.departure_airport(),
                    flight.arrival_airport()
                )
            }
            Self::CreateCustomer(customer) => {
                format!(
                    "Add customer {} {} with id {}",
                    customer.first_name(),
                    customer.last_name(),
                    customer.id()
                )
            }
            Self::CreateReservation {
                customer_id,
                flight_number,
                status,
            } => match flight_number {
                Some(number) => format!(
                    "Create {} reservation for customer {customer_id} on flight {number}",
                    status.name()
                ),
                None => format!(
                    "Create {} reservation for customer {customer_id} on the new flight",
                    status.name()
                ),
            },
            Self::UpdateReservationStatus {
                reservation_number,
                status,
            } => {
                format!(
                    "Set reservation {reservation_number} status to {}",
                    status.name()
                )
            }
            Self::RecordRepair(repair) => {
                format!(
                    "Record {} repair of plane {} by technician {}",
                    repair.repair_code(),
                    repair.plane_id(),
                    repair.technician_id()
                )
            }
        }
    }
}

/// The full set of writes one operation intends to make.
///
/// A plan can be printed (dry-run), logged, or handed to the executor.
/// Warnings collected during planning ride along so the caller can
/// surface them whether or not the plan runs.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// One-line summary of the operation.
    pub description: String,

    /// Writes in the order the executor applies them.
    pub actions: Vec<PlanAction>,

    /// Planner warnings for the caller to surface.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Starts an empty plan with a one-line summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Add plane");
    /// assert_eq!(plan.description, "Add plane");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::{OperationPlan, PlanAction};
    /// use avia::Plane;
    ///
    /// let plane = Plane::new("Boeing", "737", 4, 180).unwrap();
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::CreatePlane(plane));
    ///
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book flight")
    ///     .add_warning("flight departs within 24 hours");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns true when the plan carries no actions.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns how many actions the plan carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::{OperationPlan, PlanAction};
    /// use avia::Pilot;
    ///
    /// let pilot = Pilot::new("Amelia Earhart", "US").unwrap();
    /// let plan = OperationPlan::new("Add pilot").add_action(PlanAction::CreatePilot(pilot));
    ///
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
