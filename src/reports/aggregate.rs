//! Expense aggregation
//!
//! Pure, single-pass reductions over a slice of expenses. Nothing here
//! touches storage or fails: unknown category ids are folded into the
//! fallback category, and empty input produces empty output.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{lookup_category, Expense, Money};

/// Number of most recent days the spending trend keeps
pub const TREND_WINDOW_DAYS: usize = 14;

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Resolved category id (unknown ids become the fallback id)
    pub category_id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub total: Money,
    pub count: usize,
}

/// Spending on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: Money,
    pub count: usize,
}

impl DailyTotal {
    /// Short axis label, e.g. "Jan 05"
    pub fn label(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

/// Sum and count expenses per category, biggest total first.
///
/// Categories with equal totals keep the order in which they first appear
/// in `expenses`.
pub fn calculate_category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let category = lookup_category(&expense.category);
        let slot = *index.entry(category.id).or_insert_with(|| {
            totals.push(CategoryTotal {
                category_id: category.id,
                name: category.name,
                emoji: category.emoji,
                color: category.color,
                total: Money::zero(),
                count: 0,
            });
            totals.len() - 1
        });

        totals[slot].total += expense.amount;
        totals[slot].count += 1;
    }

    // sort_by is stable, so ties stay in first-appearance order
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Expenses ordered newest day first; same-day expenses keep input order.
pub fn sort_expenses_by_date(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Sum and count expenses per calendar day, oldest first, keeping only the
/// most recent [`TREND_WINDOW_DAYS`] days that have spending.
pub fn calculate_daily_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut days = all_daily_totals(expenses);
    let excess = days.len().saturating_sub(TREND_WINDOW_DAYS);
    days.drain(..excess);
    days
}

/// Every day with spending, oldest first, without the trend window cut
pub fn all_daily_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut buckets: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();

    for expense in expenses {
        let bucket = buckets.entry(expense.date).or_insert((Money::zero(), 0));
        bucket.0 += expense.amount;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (amount, count))| DailyTotal {
            date,
            amount,
            count,
        })
        .collect()
}

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_AMOUNT;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(description: &str, cents: i64, category: &str, on: NaiveDate) -> Expense {
        let mut e = Expense::new(description, Money::from_cents(cents), "food", on);
        // Set directly so unknown ids can be exercised
        e.category = category.to_string();
        e
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("Groceries", 1000, "food", date(2025, 1, 3)),
            expense("Bus", 500, "transport", date(2025, 1, 3)),
            expense("Lunch", 250, "food", date(2025, 1, 4)),
            expense("Book", 2000, "study", date(2025, 1, 2)),
        ]
    }

    #[test]
    fn test_category_totals_grouping_and_order() {
        let totals = calculate_category_totals(&sample());

        let ids: Vec<_> = totals.iter().map(|t| t.category_id).collect();
        assert_eq!(ids, ["study", "food", "transport"]);

        assert_eq!(totals[1].total, Money::from_cents(1250));
        assert_eq!(totals[1].count, 2);
        assert_eq!(totals[1].name, "Food & Groceries");
        assert_eq!(totals[1].emoji, "🍔");
    }

    #[test]
    fn test_category_totals_conserve_amount_and_count() {
        let expenses = sample();
        let totals = calculate_category_totals(&expenses);

        let sum: Money = totals.iter().map(|t| t.total).sum();
        assert_eq!(sum, total_spent(&expenses));
        assert_eq!(totals.iter().map(|t| t.count).sum::<usize>(), expenses.len());
    }

    #[test]
    fn test_category_totals_ties_keep_first_appearance() {
        let day = date(2025, 1, 1);
        let expenses = vec![
            expense("a", 500, "health", day),
            expense("b", 900, "shopping", day),
            expense("c", 500, "transport", day),
        ];

        let ids: Vec<_> = calculate_category_totals(&expenses)
            .iter()
            .map(|t| t.category_id)
            .collect();
        assert_eq!(ids, ["shopping", "health", "transport"]);
    }

    #[test]
    fn test_unknown_categories_merge_into_fallback() {
        let day = date(2025, 1, 1);
        let expenses = vec![
            expense("legacy", 300, "rent", day),
            expense("misc", 200, "other", day),
            expense("older", 100, "bills", day),
        ];

        let totals = calculate_category_totals(&expenses);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category_id, "other");
        assert_eq!(totals[0].name, "Other");
        assert_eq!(totals[0].total, Money::from_cents(600));
        assert_eq!(totals[0].count, 3);
    }

    #[test]
    fn test_category_totals_idempotent() {
        let expenses = sample();
        assert_eq!(
            calculate_category_totals(&expenses),
            calculate_category_totals(&expenses)
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_category_totals(&[]).is_empty());
        assert!(sort_expenses_by_date(&[]).is_empty());
        assert!(calculate_daily_totals(&[]).is_empty());
        assert!(total_spent(&[]).is_zero());
    }

    #[test]
    fn test_sort_by_date_descending_and_stable() {
        let expenses = sample();
        let sorted = sort_expenses_by_date(&expenses);

        let names: Vec<_> = sorted.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, ["Lunch", "Groceries", "Bus", "Book"]);

        // Input untouched
        assert_eq!(expenses[0].description, "Groceries");
        assert_eq!(sorted.len(), expenses.len());
    }

    #[test]
    fn test_sort_by_date_is_identity_on_sorted_input() {
        let sorted = sort_expenses_by_date(&sample());
        assert_eq!(sort_expenses_by_date(&sorted), sorted);
    }

    #[test]
    fn test_largest_amounts_aggregate_without_overflow() {
        let day = date(2025, 1, 1);
        let expenses: Vec<_> = (0..3)
            .map(|_| expense("big", MAX_AMOUNT.cents(), "food", day))
            .collect();
        assert!(expenses.iter().all(|e| e.validate().is_ok()));

        let totals = calculate_category_totals(&expenses);
        assert_eq!(totals[0].total.cents(), MAX_AMOUNT.cents() * 3);
        assert_eq!(calculate_daily_totals(&expenses)[0].amount, totals[0].total);
        assert_eq!(total_spent(&expenses), totals[0].total);
    }

    #[test]
    fn test_daily_totals_grouping() {
        let days = calculate_daily_totals(&sample());

        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, [date(2025, 1, 2), date(2025, 1, 3), date(2025, 1, 4)]);
        assert_eq!(days[1].amount, Money::from_cents(1500));
        assert_eq!(days[1].count, 2);
        assert_eq!(days[0].label(), "Jan 02");
    }

    #[test]
    fn test_same_calendar_day_in_different_years_kept_apart() {
        let expenses = vec![
            expense("then", 100, "food", date(2024, 3, 1)),
            expense("now", 200, "food", date(2025, 3, 1)),
        ];

        let days = calculate_daily_totals(&expenses);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].label(), days[1].label());
        assert_eq!(days[0].date.format("%Y").to_string(), "2024");
    }

    #[test]
    fn test_daily_totals_keep_most_recent_window() {
        let expenses: Vec<_> = (1..=20)
            .map(|d| expense("day", d as i64 * 100, "food", date(2025, 1, d)))
            .collect();

        let days = calculate_daily_totals(&expenses);
        assert_eq!(days.len(), TREND_WINDOW_DAYS);
        assert_eq!(days[0].date, date(2025, 1, 7));
        assert_eq!(days[TREND_WINDOW_DAYS - 1].date, date(2025, 1, 20));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));

        assert_eq!(all_daily_totals(&expenses).len(), 20);
    }

    #[test]
    fn test_daily_totals_conserve_amount_within_window() {
        let expenses = sample();
        let days = calculate_daily_totals(&expenses);

        let sum: Money = days.iter().map(|d| d.amount).sum();
        assert_eq!(sum, total_spent(&expenses));
        assert_eq!(days.iter().map(|d| d.count).sum::<usize>(), expenses.len());
    }
}
