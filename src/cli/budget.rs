//! Monthly budget CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_status;
use crate::display::messages::BUDGET_UPDATED;
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_month_or_current};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending against the monthly budget
    Status {
        /// Month to check (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the monthly budget
    Set {
        /// New monthly budget (e.g. "500")
        amount: String,
    },

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Status { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let today = Local::now().date_naive();
            let summary = service.summary(month, settings.monthly_budget, today)?;
            print!(
                "{}",
                format_budget_status(&summary, settings.currency().symbol)
            );
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_monthly_budget(settings, amount)?;
            println!("{}", BUDGET_UPDATED);
            println!("  Monthly budget: {}", settings.format_money(amount));
        }

        BudgetCommands::Log { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
                return Ok(());
            }

            println!("Recent changes ({} shown):", entries.len());
            println!();
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
