//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::display::messages::{EXPENSE_ADDED, EXPENSE_DELETED, EXPENSE_UPDATED};
use crate::error::{BudgetError, BudgetResult};
use crate::models::category::FALLBACK_CATEGORY_ID;
use crate::models::resolve_category;
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_month_or_current};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category id or name (see `category list`)
        #[arg(short, long, default_value = FALLBACK_CATEGORY_ID)]
        category: String,
        /// Date of the expense (YYYY-MM-DD, "today", "yesterday")
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this month (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense in detail
    Show {
        /// Expense id (full or "exp-xxxxxxxx")
        id: String,
    },

    /// Change an expense
    Edit {
        /// Expense id (full or "exp-xxxxxxxx")
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense id (full or "exp-xxxxxxxx")
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency().symbol;

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d, &settings.date_format)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = service.create(CreateExpenseInput {
                description,
                amount: parse_amount(&amount)?,
                category,
                date,
            })?;

            println!("{}", EXPENSE_ADDED);
            println!(
                "  {} {} {} ({})",
                expense.id,
                expense.category_info().emoji,
                expense.description,
                settings.format_money(expense.amount)
            );
        }

        ExpenseCommands::List {
            month,
            category,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(month) = month {
                filter = filter.month(parse_month_or_current(Some(&month))?);
            }
            if let Some(category) = category {
                let resolved = resolve_category(&category)
                    .ok_or_else(|| BudgetError::category_not_found(category.trim()))?;
                filter = filter.category(resolved.id);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(&filter)?;
            print!(
                "{}",
                format_expense_list(&expenses, symbol, filter.is_filtered())
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let changes = UpdateExpenseInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category,
                date: date
                    .as_deref()
                    .map(|d| parse_date(d, &settings.date_format))
                    .transpose()?,
            };

            if changes.is_empty() {
                println!("Nothing to change. Use --amount, --description, --category or --date.");
                return Ok(());
            }

            let expense = service.find(&id)?;
            let updated = service.update(expense.id, changes)?;

            println!("{}", EXPENSE_UPDATED);
            print!("{}", format_expense_details(&updated, settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.find(&id)?;
            let removed = service.delete(expense.id)?;

            println!("{}", EXPENSE_DELETED);
            println!(
                "  {} {} ({})",
                removed.id,
                removed.description,
                settings.format_money(removed.amount)
            );
        }
    }

    Ok(())
}
