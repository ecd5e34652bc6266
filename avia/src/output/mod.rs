//! Output formatting for report rows.
//!
//! This module renders count reports (repairs per plane, repairs per
//! year) into the formats the CLI exposes: an aligned text table for
//! humans, JSON for tooling, and CSV for spreadsheets. Single-value
//! results (ids, statuses, counts) are printed bare by the caller and
//! never pass through here.

mod formatters;

use crate::Result;

pub use formatters::{CsvFormatter, JsonFormatter, TableFormatter};

/// A two-column count report ready for rendering.
///
/// Rows are rendered in the order given; the reports already sort them
/// the way each query specifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    key_column: String,
    value_column: String,
    rows: Vec<(i64, i64)>,
}

impl CountReport {
    /// Creates a report with the given column names and rows.
    #[must_use]
    pub fn new(
        key_column: impl Into<String>,
        value_column: impl Into<String>,
        rows: Vec<(i64, i64)>,
    ) -> Self {
        Self {
            key_column: key_column.into(),
            value_column: value_column.into(),
            rows,
        }
    }

    /// Creates a repairs-per-plane report.
    #[must_use]
    pub fn per_plane(rows: Vec<(i64, i64)>) -> Self {
        Self::new("plane", "repairs", rows)
    }

    /// Creates a repairs-per-year report.
    #[must_use]
    pub fn per_year(rows: Vec<(i64, i64)>) -> Self {
        Self::new("year", "repairs", rows)
    }

    /// Returns the name of the key column.
    #[must_use]
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Returns the name of the value column.
    #[must_use]
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Returns the report rows.
    #[must_use]
    pub fn rows(&self) -> &[(i64, i64)] {
        &self.rows
    }
}

/// Trait for rendering a count report into an output format.
pub trait ReportFormatter {
    /// Renders the report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &CountReport) -> Result<String>;
}

/// Available output formats for count reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Aligned text table with a header row.
    #[default]
    Table,
    /// Pretty-printed JSON array of row objects.
    Json,
    /// CSV with a header record.
    Csv,
}

impl ReportFormat {
    /// Creates a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::output::{CountReport, ReportFormat};
    ///
    /// let report = CountReport::per_plane(vec![(2, 5), (1, 3)]);
    /// let formatter = ReportFormat::Csv.create_formatter();
    /// let rendered = formatter.format(&report).unwrap();
    /// assert!(rendered.starts_with("plane,repairs"));
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}
