//! Repairs-per-plane report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, render_report, FormatOption, GlobalOptions};
use avia::operations::reports;
use avia::output::CountReport;
use clap::Args;

/// Report repair counts per plane, busiest plane first.
#[derive(Args)]
pub struct RepairsPerPlaneCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: FormatOption,
}

impl RepairsPerPlaneCommand {
    /// Execute the repairs-per-plane command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let rows = reports::repairs_per_plane(&db).map_err(CliError::from)?;
        let report = CountReport::per_plane(rows);
        println!("{}", render_report(self.format, &report)?);

        Ok(())
    }
}
