use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use student_budget::cli::{
    handle_budget_command, handle_category_command, handle_currency_command,
    handle_expense_command, handle_export_command, handle_init_command, handle_report_command,
    handle_settings_command,
};
use student_budget::config::paths::{BudgetPaths, DATA_DIR_ENV};
use student_budget::config::settings::Settings;
use student_budget::display::format_budget_status;
use student_budget::services::BudgetService;
use student_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with a monthly student budget",
    long_about = "student-budget records your expenses, keeps an eye on your \
                  monthly budget and shows where the money went, by category \
                  and by day."
)]
struct Cli {
    /// Directory holding settings, expenses and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your name, budget and currency
    Init(student_budget::cli::InitArgs),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(student_budget::cli::ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(student_budget::cli::BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(student_budget::cli::ReportCommands),

    /// Expense categories
    #[command(subcommand)]
    Category(student_budget::cli::CategoryCommands),

    /// Display currency
    #[command(subcommand)]
    Currency(student_budget::cli::CurrencyCommands),

    /// User settings
    #[command(subcommand)]
    Settings(student_budget::cli::SettingsCommands),

    /// Export expenses to a file
    Export(student_budget::cli::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init(args)) => {
            handle_init_command(&storage, &mut settings, args)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        None => {
            match settings.display_name() {
                Some(name) => println!("Hi {}! 👋", name),
                None => println!("student-budget - track your spending"),
            }
            println!();

            if settings.onboarding_complete {
                let today = Local::now().date_naive();
                let summary = BudgetService::new(&storage).summary(
                    student_budget::models::Month::of(today),
                    settings.monthly_budget,
                    today,
                )?;
                print!(
                    "{}",
                    format_budget_status(&summary, settings.currency().symbol)
                );
                println!();
            } else {
                println!("Run 'budget init' to set your budget and currency.");
            }

            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
