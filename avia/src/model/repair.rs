//! Repair attribute type.

use chrono::NaiveDate;

use super::ValidationError;

/// Recognized repair codes: major, minor, revision.
const REPAIR_CODES: [&str; 3] = ["MJ", "MN", "RV"];

/// Attributes of a maintenance repair record.
///
/// The repair id is assigned by the store at insert time. The plane and
/// technician references are checked for existence when the repair is
/// persisted, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    repair_date: NaiveDate,
    repair_code: String,
    plane_id: i64,
    technician_id: i64,
}

impl Repair {
    /// Creates a validated repair record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the repair code is not one of
    /// `MJ`, `MN`, `RV`, or if either reference id is non-positive.
    pub fn new(
        repair_date: NaiveDate,
        repair_code: &str,
        plane_id: i64,
        technician_id: i64,
    ) -> Result<Self, ValidationError> {
        let code = repair_code.trim().to_uppercase();
        if !REPAIR_CODES.contains(&code.as_str()) {
            return Err(ValidationError::new(
                "repair_code",
                "must be one of MJ, MN, RV",
            ));
        }
        if plane_id < 1 {
            return Err(ValidationError::new("plane_id", "must be a positive integer"));
        }
        if technician_id < 1 {
            return Err(ValidationError::new(
                "technician_id",
                "must be a positive integer",
            ));
        }
        Ok(Self {
            repair_date,
            repair_code: code,
            plane_id,
            technician_id,
        })
    }

    /// Returns the repair date.
    #[must_use]
    pub const fn repair_date(&self) -> NaiveDate {
        self.repair_date
    }

    /// Returns the normalized repair code.
    #[must_use]
    pub fn repair_code(&self) -> &str {
        &self.repair_code
    }

    /// Returns the repaired plane's id.
    #[must_use]
    pub const fn plane_id(&self) -> i64 {
        self.plane_id
    }

    /// Returns the performing technician's id.
    #[must_use]
    pub const fn technician_id(&self) -> i64 {
        self.technician_id
    }
}
