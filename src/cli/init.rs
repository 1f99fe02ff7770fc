//! First-run setup command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::{OnboardingInput, SettingsService};
use crate::storage::Storage;

use super::parse_amount;

#[derive(Args)]
pub struct InitArgs {
    /// Your name, used in greetings
    #[arg(short, long)]
    pub name: Option<String>,

    /// Monthly budget (e.g. "500")
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Currency code (GBP, USD, EUR)
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// Handle the init command
pub fn handle_init_command(
    storage: &Storage,
    settings: &mut Settings,
    args: InitArgs,
) -> BudgetResult<()> {
    let already = storage.is_initialized();

    let input = OnboardingInput {
        user_name: args.name,
        monthly_budget: args.budget.as_deref().map(parse_amount).transpose()?,
        currency: args.currency,
    };
    SettingsService::new(storage).complete_onboarding(settings, input)?;

    match settings.display_name() {
        Some(name) => println!("Welcome, {}! 👋", name),
        None => println!("Welcome! 👋"),
    }
    if already {
        println!("Settings updated.");
    } else {
        println!("Budget tracker ready at {}", storage.paths().base_dir().display());
    }
    println!(
        "Monthly budget: {}  Currency: {}",
        settings.format_money(settings.monthly_budget),
        settings.currency().code
    );
    println!();
    println!("Add your first expense: budget expense add <amount> <description>");

    Ok(())
}
