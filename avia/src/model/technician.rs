//! Technician attribute type.

use super::{required_text, ValidationError};

/// Attributes of a technician record: `full_name` at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technician {
    full_name: String,
}

impl Technician {
    /// Creates a validated technician record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name is empty or too long.
    pub fn new(full_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: required_text("full_name", full_name, 128)?,
        })
    }

    /// Returns the technician's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
