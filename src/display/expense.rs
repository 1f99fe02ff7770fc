//! Expense display formatting
//!
//! List rows and the detail view for expenses.

use crate::config::Settings;
use crate::models::Expense;

use super::format::{format_expense_date, format_user_date, pluralize_expenses, separator, truncate};
use super::messages::{FILTER_NO_RESULTS, NO_EXPENSES};

const DESCRIPTION_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 18;

/// One list row: id, emoji, description, category, date, amount
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    let category = expense.category_info();
    format!(
        "{}  {} {:<dw$}  {:<cw$}  {:<12}  {:>10}",
        expense.id,
        category.emoji,
        truncate(&expense.description, DESCRIPTION_WIDTH),
        truncate(category.name, CATEGORY_WIDTH),
        format_expense_date(expense.date),
        expense.amount.format_with_symbol(symbol),
        dw = DESCRIPTION_WIDTH,
        cw = CATEGORY_WIDTH,
    )
}

/// Expense list with a count header.
///
/// `filtered` picks the empty-state message when nothing is shown.
pub fn format_expense_list(expenses: &[Expense], symbol: &str, filtered: bool) -> String {
    if expenses.is_empty() {
        return if filtered {
            FILTER_NO_RESULTS.render()
        } else {
            NO_EXPENSES.render()
        };
    }

    let mut output = String::new();
    output.push_str(&format!("📝 Recent Expenses ({})\n", pluralize_expenses(expenses.len())));
    output.push_str(&separator(86));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Detail view of a single expense
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let category = expense.category_info();
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount:      {}\n", settings.format_money(expense.amount)));
    output.push_str(&format!("Category:    {}\n", category));
    if category.id != expense.category {
        output.push_str(&format!("             (stored as '{}')\n", expense.category));
    }
    output.push_str(&format!(
        "Date:        {}\n",
        format_user_date(expense.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if expense.updated_at != expense.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            expense.updated_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    output.push_str(&format!("ID:          {}\n", expense.id.as_uuid()));

    output
}
