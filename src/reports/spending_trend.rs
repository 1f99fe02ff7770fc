//! Spending Trend Report
//!
//! Daily spending over the most recent days that have any, with summary
//! statistics for the window.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{Expense, Money, Month};
use crate::storage::Storage;

use super::aggregate::{calculate_daily_totals, DailyTotal};

/// Spending Trend Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingTrendReport {
    /// Oldest day first
    pub days: Vec<DailyTotal>,
    /// Total across the shown days
    pub total: Money,
}

impl SpendingTrendReport {
    /// Generate the trend from storage, optionally restricted to one month
    pub fn generate(storage: &Storage, month: Option<Month>) -> BudgetResult<Self> {
        let expenses = match month {
            Some(month) => storage.expenses.get_by_month(month)?,
            None => storage.expenses.get_all()?,
        };
        Ok(Self::from_expenses(&expenses))
    }

    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let days = calculate_daily_totals(expenses);
        let total = days.iter().map(|d| d.amount).sum();
        Self { days, total }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days shown
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Mean spending per shown day
    pub fn average_per_day(&self) -> Money {
        self.total.average_over(self.days.len())
    }

    /// Day with the most spending; the earliest wins a tie
    pub fn highest_day(&self) -> Option<&DailyTotal> {
        self.days.iter().fold(None, |best: Option<&DailyTotal>, day| match best {
            Some(b) if b.amount >= day.amount => Some(b),
            _ => Some(day),
        })
    }
}
