//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, database opening, and report rendering.

use crate::error::CliError;
use avia::output::{CountReport, ReportFormat};
use avia::{Config, ConfigBuilder, Database, DatabaseConfig, ReservationStatus};
use clap::ValueEnum;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Loads the resolved configuration.
///
/// Flags take precedence over environment variables, which take
/// precedence over `<data_dir>/config.yaml`, which takes precedence
/// over the built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(global.data_dir.clone())
        .with_busy_timeout(global.busy_timeout)
        .build()
        .map_err(CliError::from)
}

/// Opens the database described by the configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database does not exist yet and
/// auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = config.database_path();

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    if !db_path.exists() {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(config.busy_timeout);
    Database::open(db_config).map_err(CliError::from)
}

/// Parses an operator-supplied status letter.
pub fn parse_status(input: &str) -> Result<ReservationStatus, CliError> {
    input
        .parse::<ReservationStatus>()
        .map_err(|e| CliError::from(avia::Error::from(e)))
}

/// Output format argument for report commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatOption {
    /// Aligned text table (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<FormatOption> for ReportFormat {
    fn from(option: FormatOption) -> Self {
        match option {
            FormatOption::Table => Self::Table,
            FormatOption::Json => Self::Json,
            FormatOption::Csv => Self::Csv,
        }
    }
}

/// Renders a count report in the requested format.
pub fn render_report(format: FormatOption, report: &CountReport) -> Result<String, CliError> {
    ReportFormat::from(format)
        .create_formatter()
        .format(report)
        .map_err(CliError::from)
}
