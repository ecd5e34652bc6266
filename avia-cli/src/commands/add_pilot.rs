//! Add-pilot command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::{AddPilotOptions, PlanExecutor, ProvisionPlan};
use clap::Args;

/// Add a pilot to the roster.
#[derive(Args)]
pub struct AddPilotCommand {
    /// Full name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Nationality
    #[arg(long, value_name = "NATIONALITY")]
    pub nationality: String,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl AddPilotCommand {
    /// Execute the add-pilot command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = AddPilotOptions::new(self.name, self.nationality);
        let plan = ProvisionPlan::pilot(options)
            .build_plan()
            .map_err(CliError::from)?;

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
            }
            return Ok(());
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if let Some(id) = result.entity_id {
            println!("{id}");
        }

        Ok(())
    }
}
