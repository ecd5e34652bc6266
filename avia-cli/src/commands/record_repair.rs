//! Record-repair command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::{PlanExecutor, RecordRepairOptions, RepairPlan};
use clap::Args;

/// Record a maintenance repair.
#[derive(Args)]
pub struct RecordRepairCommand {
    /// Id of the repaired plane
    #[arg(long = "plane", value_name = "ID")]
    pub plane_id: i64,

    /// Id of the technician who performed the repair
    #[arg(long = "technician", value_name = "ID")]
    pub technician_id: i64,

    /// Repair code: MJ, MN, or RV
    #[arg(long = "code", value_name = "CODE")]
    pub repair_code: String,

    /// Repair date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "DATE")]
    pub repair_date: String,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl RecordRepairCommand {
    /// Execute the record-repair command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = RecordRepairOptions::new(
            self.plane_id,
            self.technician_id,
            self.repair_code,
            self.repair_date,
        );

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = RepairPlan::new(options)
            .build_plan(&db)
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

        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if let Some(id) = result.entity_id {
            println!("{id}");
        }

        Ok(())
    }
}
