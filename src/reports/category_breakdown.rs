//! Category Breakdown Report
//!
//! Share of a month's spending taken by each category.

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money, Month};
use crate::storage::Storage;

use super::aggregate::{calculate_category_totals, total_spent, CategoryTotal};

/// Shares below this percentage get no label on the chart
pub const MIN_LABELLED_PERCENT: f64 = 5.0;

/// One category with its share of the month
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    #[serde(flatten)]
    pub total: CategoryTotal,
    /// Share of all spending, 0-100
    pub percentage: f64,
}

impl CategoryShare {
    /// Whether the slice is large enough to carry a percentage label
    pub fn shows_label(&self) -> bool {
        self.percentage >= MIN_LABELLED_PERCENT
    }
}

/// Category Breakdown Report
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdownReport {
    pub month: Month,
    /// Biggest category first
    pub rows: Vec<CategoryShare>,
    pub total_spent: Money,
    pub expense_count: usize,
}

impl CategoryBreakdownReport {
    /// Generate the breakdown for a month from storage
    pub fn generate(storage: &Storage, month: Month) -> BudgetResult<Self> {
        let expenses = storage.expenses.get_by_month(month)?;
        Ok(Self::from_expenses(month, &expenses))
    }

    /// Build the breakdown from an already selected set of expenses
    pub fn from_expenses(month: Month, expenses: &[Expense]) -> Self {
        let total_spent = total_spent(expenses);
        let rows = calculate_category_totals(expenses)
            .into_iter()
            .map(|total| {
                let percentage = if total_spent.is_positive() {
                    total.total.cents() as f64 / total_spent.cents() as f64 * 100.0
                } else {
                    0.0
                };
                CategoryShare { total, percentage }
            })
            .collect();

        Self {
            month,
            rows,
            total_spent,
            expense_count: expenses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Category with the most spending
    pub fn top_category(&self) -> Option<&CategoryShare> {
        self.rows.first()
    }

    /// Export the breakdown as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record([
            "Month",
            "Category ID",
            "Category",
            "Amount",
            "Expense Count",
            "Percentage",
        ])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

        for row in &self.rows {
            wtr.write_record([
                self.month.to_string(),
                row.total.category_id.to_string(),
                row.total.name.to_string(),
                row.total.total.to_string(),
                row.total.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        }

        wtr.write_record([
            self.month.to_string(),
            String::new(),
            "TOTAL".to_string(),
            self.total_spent.to_string(),
            self.expense_count.to_string(),
            if self.is_empty() { "0.00" } else { "100.00" }.to_string(),
        ])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

        wtr.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
        Ok(())
    }
}
