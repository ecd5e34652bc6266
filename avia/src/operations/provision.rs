//! Entity provisioning planning.
//!
//! This module builds plans that add planes, pilots, and technicians.
//! These entities have no natural key, so every invocation inserts a new
//! row with a freshly allocated id; two submissions with identical
//! attributes produce two records.

use crate::error::Result;
use crate::{Pilot, Plane, Technician};

use super::plan::{OperationPlan, PlanAction};

/// Options for adding a plane.
#[derive(Debug, Clone)]
pub struct AddPlaneOptions {
    /// The manufacturer name.
    pub make: String,

    /// The model designation.
    pub model: String,

    /// The age of the airframe in years.
    pub age: i64,

    /// The total seat count.
    pub seat_count: i64,
}

impl AddPlaneOptions {
    /// Creates options for adding a plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::AddPlaneOptions;
    ///
    /// let options = AddPlaneOptions::new("Boeing", "737-800", 12, 189);
    /// assert_eq!(options.seat_count, 189);
    /// ```
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>, age: i64, seat_count: i64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            age,
            seat_count,
        }
    }
}

/// Options for adding a pilot.
#[derive(Debug, Clone)]
pub struct AddPilotOptions {
    /// The pilot's full name.
    pub full_name: String,

    /// The pilot's nationality.
    pub nationality: String,
}

impl AddPilotOptions {
    /// Creates options for adding a pilot.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::AddPilotOptions;
    ///
    /// let options = AddPilotOptions::new("Amelia Earhart", "US");
    /// assert_eq!(options.nationality, "US");
    /// ```
    #[must_use]
    pub fn new(full_name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            nationality: nationality.into(),
        }
    }
}

/// Options for adding a technician.
#[derive(Debug, Clone)]
pub struct AddTechnicianOptions {
    /// The technician's full name.
    pub full_name: String,
}

impl AddTechnicianOptions {
    /// Creates options for adding a technician.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::AddTechnicianOptions;
    ///
    /// let options = AddTechnicianOptions::new("Kelly Johnson");
    /// assert_eq!(options.full_name, "Kelly Johnson");
    /// ```
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// The entity a provisioning plan creates.
#[derive(Debug, Clone)]
enum ProvisionRequest {
    Plane(AddPlaneOptions),
    Pilot(AddPilotOptions),
    Technician(AddTechnicianOptions),
}

/// A provisioning plan generator.
///
/// This struct analyzes an add-entity request, validates all fields, and
/// generates a one-action plan. It never reads the database: there is no
/// lookup to perform because these entities carry no natural key.
///
/// # Examples
///
/// ```
/// use avia::operations::{AddPlaneOptions, ProvisionPlan};
///
/// let options = AddPlaneOptions::new("Boeing", "737-800", 12, 189);
/// let plan = ProvisionPlan::plane(options).build_plan().unwrap();
/// assert_eq!(plan.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    request: ProvisionRequest,
}

impl ProvisionPlan {
    /// Creates a plan generator for adding a plane.
    #[must_use]
    pub const fn plane(options: AddPlaneOptions) -> Self {
        Self {
            request: ProvisionRequest::Plane(options),
        }
    }

    /// Creates a plan generator for adding a pilot.
    #[must_use]
    pub const fn pilot(options: AddPilotOptions) -> Self {
        Self {
            request: ProvisionRequest::Pilot(options),
        }
    }

    /// Creates a plan generator for adding a technician.
    #[must_use]
    pub const fn technician(options: AddTechnicianOptions) -> Self {
        Self {
            request: ProvisionRequest::Technician(options),
        }
    }

    /// Builds an operation plan for this provisioning request.
    ///
    /// All field validation happens here; a failure produces no plan and
    /// therefore no write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if any field
    /// violates its constraint.
    pub fn build_plan(&self) -> Result<OperationPlan> {
        match &self.request {
            ProvisionRequest::Plane(options) => {
                let plane = Plane::new(
                    &options.make,
                    &options.model,
                    options.age,
                    options.seat_count,
                )?;
                Ok(OperationPlan::new(format!(
                    "Add plane {} {}",
                    plane.make(),
                    plane.model()
                ))
                .add_action(PlanAction::CreatePlane(plane)))
            }
            ProvisionRequest::Pilot(options) => {
                let pilot = Pilot::new(&options.full_name, &options.nationality)?;
                Ok(
                    OperationPlan::new(format!("Add pilot {}", pilot.full_name()))
                        .add_action(PlanAction::CreatePilot(pilot)),
                )
            }
            ProvisionRequest::Technician(options) => {
                let technician = Technician::new(&options.full_name)?;
                Ok(
                    OperationPlan::new(format!("Add technician {}", technician.full_name()))
                        .add_action(PlanAction::CreateTechnician(technician)),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::error::Error;
    use crate::operations::PlanExecutor;

    #[test]
    fn test_plane_plan_has_single_action() {
        let options = AddPlaneOptions::new("Boeing", "737", 4, 180);
        let plan = ProvisionPlan::plane(options).build_plan().unwrap();

        assert_eq!(plan.len(), 1);
        assert!(matches!(plan.actions[0], PlanAction::CreatePlane(_)));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_pilot_plan_has_single_action() {
        let options = AddPilotOptions::new("Amelia Earhart", "US");
        let plan = ProvisionPlan::pilot(options).build_plan().unwrap();

        assert_eq!(plan.len(), 1);
        assert!(matches!(plan.actions[0], PlanAction::CreatePilot(_)));
    }

    #[test]
    fn test_technician_plan_has_single_action() {
        let options = AddTechnicianOptions::new("Kelly Johnson");
        let plan = ProvisionPlan::technician(options).build_plan().unwrap();

        assert_eq!(plan.len(), 1);
        assert!(matches!(plan.actions[0], PlanAction::CreateTechnician(_)));
    }

    #[test]
    fn test_invalid_plane_yields_validation_error() {
        let options = AddPlaneOptions::new("Boeing", "737", 4, 500);
        let err = ProvisionPlan::plane(options).build_plan().unwrap_err();

        assert!(matches!(err, Error::Validation { ref field, .. } if field == "seat_count"));
    }

    #[test]
    fn test_empty_pilot_name_yields_validation_error() {
        let options = AddPilotOptions::new("  ", "US");
        let err = ProvisionPlan::pilot(options).build_plan().unwrap_err();

        assert!(matches!(err, Error::Validation { ref field, .. } if field == "full_name"));
    }

    #[test]
    fn test_identical_planes_create_distinct_rows() {
        let mut db = create_test_database();
        let options = AddPlaneOptions::new("Boeing", "737", 4, 180);

        for expected_id in 1..=2 {
            let plan = ProvisionPlan::plane(options.clone()).build_plan().unwrap();
            let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
            assert_eq!(result.entity_id, Some(expected_id));
        }

        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM planes WHERE make = 'Boeing' AND model = '737'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }
}
