//! Repair recording planning.
//!
//! This module builds plans that record a maintenance repair performed on
//! a plane by a technician. The repair reports read from the same table,
//! so this is the write path that feeds them.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::parse_date;
use crate::Repair;

use super::plan::{OperationPlan, PlanAction};

/// Options for recording a repair.
#[derive(Debug, Clone)]
pub struct RecordRepairOptions {
    /// The id of the repaired plane.
    pub plane_id: i64,

    /// The id of the technician who performed the repair.
    pub technician_id: i64,

    /// The repair code: `MJ`, `MN`, or `RV`.
    pub repair_code: String,

    /// The repair date in `%Y-%m-%d` form.
    pub repair_date: String,
}

impl RecordRepairOptions {
    /// Creates options for recording a repair.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::RecordRepairOptions;
    ///
    /// let options = RecordRepairOptions::new(3, 2, "MJ", "2024-02-10");
    /// assert_eq!(options.plane_id, 3);
    /// ```
    #[must_use]
    pub fn new(
        plane_id: i64,
        technician_id: i64,
        repair_code: impl Into<String>,
        repair_date: impl Into<String>,
    ) -> Self {
        Self {
            plane_id,
            technician_id,
            repair_code: repair_code.into(),
            repair_date: repair_date.into(),
        }
    }
}

/// A repair plan generator.
///
/// This struct validates the repair code and date, checks that the plane
/// and technician exist, and generates a one-action plan.
pub struct RepairPlan {
    options: RecordRepairOptions,
}

impl RepairPlan {
    /// Creates a new repair plan generator with the given options.
    #[must_use]
    pub const fn new(options: RecordRepairOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this repair record.
    ///
    /// Code and date validation run before any database read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repair code is not recognized ([`Error::Validation`])
    /// - The date fails to parse ([`Error::DateFormat`])
    /// - The plane or technician does not exist ([`Error::NotFound`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::operations::{RecordRepairOptions, RepairPlan};
    /// use avia::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
    /// let options = RecordRepairOptions::new(3, 2, "MJ", "2024-02-10");
    /// let plan = RepairPlan::new(options).build_plan(&db).unwrap();
    /// ```
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let repair_date = parse_date(&self.options.repair_date)?;
        let repair = Repair::new(
            repair_date,
            &self.options.repair_code,
            self.options.plane_id,
            self.options.technician_id,
        )?;

        let conn = db.connection();
        if !Database::plane_exists(conn, self.options.plane_id)? {
            return Err(Error::NotFound {
                resource: format!("plane {}", self.options.plane_id),
            });
        }
        if !Database::technician_exists(conn, self.options.technician_id)? {
            return Err(Error::NotFound {
                resource: format!("technician {}", self.options.technician_id),
            });
        }

        let plan = OperationPlan::new(format!(
            "Record {} repair of plane {}",
            repair.repair_code(),
            repair.plane_id()
        ))
        .add_action(PlanAction::RecordRepair(repair));

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::operations::provision::{AddPlaneOptions, AddTechnicianOptions};
    use crate::operations::{PlanExecutor, ProvisionPlan};

    fn provision_plane_and_technician(db: &mut Database) {
        let plane = ProvisionPlan::plane(AddPlaneOptions::new("Boeing", "737", 4, 180))
            .build_plan()
            .unwrap();
        PlanExecutor::new(db).execute(&plane).unwrap();
        let technician = ProvisionPlan::technician(AddTechnicianOptions::new("Wilbur Wright"))
            .build_plan()
            .unwrap();
        PlanExecutor::new(db).execute(&technician).unwrap();
    }

    #[test]
    fn test_build_plan_emits_record_repair() {
        let mut db = create_test_database();
        provision_plane_and_technician(&mut db);

        let options = RecordRepairOptions::new(1, 1, "MN", "2024-02-10");
        let plan = RepairPlan::new(options).build_plan(&db).unwrap();

        assert_eq!(plan.len(), 1);
        assert!(matches!(plan.actions[0], PlanAction::RecordRepair(_)));
    }

    #[test]
    fn test_lowercase_code_is_normalized() {
        let mut db = create_test_database();
        provision_plane_and_technician(&mut db);

        let options = RecordRepairOptions::new(1, 1, "rv", "2024-02-10");
        let plan = RepairPlan::new(options).build_plan(&db).unwrap();

        let PlanAction::RecordRepair(ref repair) = plan.actions[0] else {
            panic!("expected RecordRepair action");
        };
        assert_eq!(repair.repair_code(), "RV");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let db = create_test_database();
        let options = RecordRepairOptions::new(1, 1, "XX", "2024-02-10");

        let err = RepairPlan::new(options).build_plan(&db).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation { ref field, .. } if field == "repair_code"
        ));
    }

    #[test]
    fn test_bad_date_rejected_before_store_read() {
        let db = create_test_database();
        let options = RecordRepairOptions::new(1, 1, "MJ", "02/10/2024");

        let err = RepairPlan::new(options).build_plan(&db).unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
    }

    #[test]
    fn test_missing_plane_is_not_found() {
        let db = create_test_database();
        let options = RecordRepairOptions::new(1, 1, "MJ", "2024-02-10");

        let err = RepairPlan::new(options).build_plan(&db).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("plane 1"));
    }

    #[test]
    fn test_missing_technician_is_not_found() {
        let mut db = create_test_database();
        let plane = ProvisionPlan::plane(AddPlaneOptions::new("Boeing", "737", 4, 180))
            .build_plan()
            .unwrap();
        PlanExecutor::new(&mut db).execute(&plane).unwrap();

        let options = RecordRepairOptions::new(1, 9, "MJ", "2024-02-10");
        let err = RepairPlan::new(options).build_plan(&db).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("technician 9"));
    }

    #[test]
    fn test_executed_plan_persists_repair() {
        let mut db = create_test_database();
        provision_plane_and_technician(&mut db);

        let options = RecordRepairOptions::new(1, 1, "MJ", "2024-02-10");
        let plan = RepairPlan::new(options).build_plan(&db).unwrap();
        let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();

        assert_eq!(result.entity_id, Some(1));
        let report = Database::repairs_per_plane(db.connection()).unwrap();
        assert_eq!(report, vec![(1, 1)]);
    }
}
