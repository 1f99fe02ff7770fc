//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod currency;
pub mod expense;
pub mod export;
pub mod init;
pub mod report;
pub mod settings;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use init::{handle_init_command, InitArgs};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};

use chrono::{Duration, Local, NaiveDate};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Month};

/// Parse a user-typed amount ("12.50", "£12.50")
pub(crate) fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input)
        .map_err(|_| BudgetError::Validation(format!("Please enter a valid amount (got '{}')", input)))
}

/// Parse a user-typed date.
///
/// Accepts "today", "yesterday", ISO dates and dates in the configured
/// display format.
pub(crate) fn parse_date(input: &str, date_format: &str) -> BudgetResult<NaiveDate> {
    let input = input.trim();
    let today = Local::now().date_naive();

    match input.to_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, date_format))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD, 'today' or 'yesterday'",
                input
            ))
        })
}

/// Parse "YYYY-MM", defaulting to the current month
pub(crate) fn parse_month_or_current(input: Option<&str>) -> BudgetResult<Month> {
    match input {
        None => Ok(Month::current()),
        Some(s) if s.eq_ignore_ascii_case("current") => Ok(Month::current()),
        Some(s) if s.eq_ignore_ascii_case("last") => Ok(Month::current().prev()),
        Some(s) => Month::parse(s).map_err(|e| BudgetError::Validation(e.to_string())),
    }
}
