//! CSV Export functionality
//!
//! One row per expense, spreadsheet-friendly.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::storage::Storage;

/// Export all expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> BudgetResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Description", "Category ID", "Category", "Amount"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in storage.expenses.get_all()? {
        let category = expense.category_info();
        wtr.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.description.clone(),
            expense.category.clone(),
            category.name.to_string(),
            expense.amount.to_string(),
        ])
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
