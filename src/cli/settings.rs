//! Settings CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::settings::{Settings, Theme};
use crate::display::messages::theme_emoji;
use crate::error::BudgetResult;
use crate::services::SettingsService;
use crate::storage::Storage;

/// Theme choice on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Switch to the other theme
    Toggle,
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the colour theme
    Theme {
        #[arg(value_enum)]
        choice: ThemeChoice,
    },

    /// Set the name used in greetings ("" clears it)
    Name { name: String },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> BudgetResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            let currency = settings.currency();
            println!("Settings");
            println!("========");
            println!("Name:           {}", settings.display_name().unwrap_or("(not set)"));
            println!("Monthly budget: {}", settings.format_money(settings.monthly_budget));
            println!("Currency:       {} ({})", currency.code, currency.symbol);
            println!("Theme:          {} {}", theme_emoji(settings.theme), settings.theme);
            println!("Date format:    {}", settings.date_format);
            println!(
                "Onboarding:     {}",
                if settings.onboarding_complete { "complete" } else { "not started" }
            );
            println!();
            println!("Data directory: {}", storage.paths().base_dir().display());
        }

        SettingsCommands::Theme { choice } => {
            let theme = match choice {
                ThemeChoice::Light => Theme::Light,
                ThemeChoice::Dark => Theme::Dark,
                ThemeChoice::Toggle => settings.theme.toggled(),
            };
            service.set_theme(settings, theme)?;
            println!("Theme set to {} {}", theme_emoji(theme), theme);
        }

        SettingsCommands::Name { name } => {
            service.set_user_name(settings, &name)?;
            match settings.display_name() {
                Some(name) => println!("Hi {}! 👋", name),
                None => println!("Name cleared."),
            }
        }
    }

    Ok(())
}
