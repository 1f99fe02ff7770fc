//! Report CLI commands

use std::io;

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_category_chart, format_trend_chart};
use crate::error::BudgetResult;
use crate::reports::{CategoryBreakdownReport, SpendingTrendReport};
use crate::storage::Storage;

use super::parse_month_or_current;

/// Where a report is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportOutput {
    /// Chart on the terminal
    #[default]
    Terminal,
    /// CSV on standard output
    Csv,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending per category for a month
    Categories {
        /// Month to report (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long, value_enum, default_value_t = ReportOutput::Terminal)]
        output: ReportOutput,
    },

    /// Daily spending over the most recent days with expenses
    Trend {
        /// Limit to one month (YYYY-MM, "current", "last"); all expenses if omitted
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency().symbol;

    match cmd {
        ReportCommands::Categories { month, output } => {
            let month = parse_month_or_current(month.as_deref())?;
            let report = CategoryBreakdownReport::generate(storage, month)?;

            match output {
                ReportOutput::Terminal => print!("{}", format_category_chart(&report, symbol)),
                ReportOutput::Csv => report.export_csv(io::stdout().lock())?,
            }
        }

        ReportCommands::Trend { month } => {
            let month = month
                .as_deref()
                .map(|m| parse_month_or_current(Some(m)))
                .transpose()?;
            let report = SpendingTrendReport::generate(storage, month)?;
            print!("{}", format_trend_chart(&report, symbol));
        }
    }

    Ok(())
}
