//! Currency CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_currency_table;
use crate::error::BudgetResult;
use crate::services::SettingsService;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// List the supported currencies
    #[command(alias = "ls")]
    List,

    /// Choose the display currency
    Set {
        /// Currency code (GBP, USD, EUR)
        code: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: CurrencyCommands,
) -> BudgetResult<()> {
    match cmd {
        CurrencyCommands::List => {
            println!("{}", format_currency_table(&settings.currency));
        }

        CurrencyCommands::Set { code } => {
            SettingsService::new(storage).set_currency(settings, &code)?;
            let currency = settings.currency();
            println!(
                "Currency set to {} ({} {})",
                currency.code, currency.symbol, currency.name
            );
        }
    }

    Ok(())
}
