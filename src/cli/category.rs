//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_table;
use crate::error::BudgetResult;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the expense categories
    #[command(alias = "ls")]
    List,
}

/// Handle a category command
pub fn handle_category_command(cmd: CategoryCommands) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            println!("{}", format_category_table());
        }
    }

    Ok(())
}
