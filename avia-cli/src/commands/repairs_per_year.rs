//! Repairs-per-year report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, render_report, FormatOption, GlobalOptions};
use avia::operations::reports;
use avia::output::CountReport;
use clap::Args;

/// Report repair counts per calendar year, quietest year first.
#[derive(Args)]
pub struct RepairsPerYearCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: FormatOption,
}

impl RepairsPerYearCommand {
    /// Execute the repairs-per-year command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let rows = reports::repairs_per_year(&db).map_err(CliError::from)?;
        let report = CountReport::per_year(rows);
        println!("{}", render_report(self.format, &report)?);

        Ok(())
    }
}
