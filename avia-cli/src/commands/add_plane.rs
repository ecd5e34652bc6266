//! Add-plane command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::{AddPlaneOptions, PlanExecutor, ProvisionPlan};
use clap::Args;

/// Add a plane to the fleet.
#[derive(Args)]
pub struct AddPlaneCommand {
    /// Manufacturer name
    #[arg(long, value_name = "MAKE")]
    pub make: String,

    /// Model designation
    #[arg(long, value_name = "MODEL")]
    pub model: String,

    /// Age in years
    #[arg(long, value_name = "YEARS")]
    pub age: i64,

    /// Number of seats (must be below 500)
    #[arg(long, value_name = "COUNT")]
    pub seats: i64,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl AddPlaneCommand {
    /// Execute the add-plane command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = AddPlaneOptions::new(self.make, self.model, self.age, self.seats);
        let plan = ProvisionPlan::plane(options)
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
