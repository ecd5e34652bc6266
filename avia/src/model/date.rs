//! Calendar date parsing.

use std::fmt;

use chrono::NaiveDate;

/// Error type for date parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    /// The input that failed to parse.
    pub input: String,
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': expected YYYY-MM-DD", self.input)
    }
}

impl std::error::Error for DateFormatError {}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Parsing is strict: the input must be a real calendar date in exactly
/// this format. No other formats are accepted.
///
/// # Errors
///
/// Returns [`DateFormatError`] if the input does not parse.
///
/// # Examples
///
/// ```
/// use avia::model::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// assert!(parse_date("01/02/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| DateFormatError {
        input: trimmed.to_string(),
    })
}
