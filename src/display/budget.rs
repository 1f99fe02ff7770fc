//! Budget status card

use crate::services::MonthlyBudgetSummary;

use super::format::{double_separator, format_bar, format_month_heading, pluralize_expenses};
use super::messages::{BUDGET_GOAL_MET, NO_BUDGET};

const CARD_WIDTH: usize = 44;
const BAR_WIDTH: usize = 30;

/// Render a month's budget status
pub fn format_budget_status(summary: &MonthlyBudgetSummary, symbol: &str) -> String {
    let status = &summary.status;
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);

    let mut output = String::new();
    output.push_str(&format!(
        "💰 Monthly Budget: {}\n",
        format_month_heading(summary.month)
    ));
    output.push_str(&double_separator(CARD_WIDTH));
    output.push('\n');

    if !status.budget.is_positive() {
        output.push_str(&NO_BUDGET.render());
        output.push_str(&format!("Spent:     {}\n", money(status.spent)));
        return output;
    }

    output.push_str(&format!("Spent:     {}\n", money(status.spent)));
    output.push_str(&format!("Budget:    {}\n", money(status.budget)));
    if status.remaining.is_negative() {
        output.push_str(&format!("Over by:   {}\n", money(-status.remaining)));
    } else {
        output.push_str(&format!("Remaining: {}\n", money(status.remaining)));
    }

    if let Some(pct) = status.percent_used() {
        output.push_str(&format!(
            "{} {:.0}% used\n",
            format_bar(pct.min(100.0), 100.0, BAR_WIDTH),
            pct
        ));
    }

    output.push_str(&format!(
        "{} {}: {}\n",
        status.band.emoji(),
        status.band.label(),
        status.band.message()
    ));
    output.push_str(&format!("{} this month\n", pluralize_expenses(summary.expense_count)));

    if summary.goal_met {
        output.push('\n');
        output.push_str(BUDGET_GOAL_MET);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{evaluate_budget, Money, Month};

    fn summary(spent: i64, budget: i64, goal_met: bool) -> MonthlyBudgetSummary {
        MonthlyBudgetSummary {
            month: Month::new(2025, 1).unwrap(),
            status: evaluate_budget(Money::from_cents(spent), Money::from_cents(budget)),
            expense_count: 3,
            goal_met,
        }
    }

    #[test]
    fn test_on_track_card() {
        let card = format_budget_status(&summary(20_000, 50_000, false), "£");
        assert!(card.contains("January 2025"));
        assert!(card.contains("Spent:     £200.00"));
        assert!(card.contains("Remaining: £300.00"));
        assert!(card.contains("40% used"));
        assert!(card.contains("✅ On Track: You're doing great!"));
        assert!(card.contains("3 expenses this month"));
        assert!(!card.contains("Amazing!"));
    }

    #[test]
    fn test_over_budget_card() {
        let card = format_budget_status(&summary(60_000, 50_000, false), "$");
        assert!(card.contains("Over by:   $100.00"));
        assert!(card.contains("120% used"));
        assert!(card.contains("🚨 Over Budget"));
    }

    #[test]
    fn test_goal_met_message() {
        let card = format_budget_status(&summary(10_000, 50_000, true), "£");
        assert!(card.contains("You stayed within budget this month"));
    }

    #[test]
    fn test_missing_budget() {
        let card = format_budget_status(&summary(10_000, 0, false), "£");
        assert!(card.contains("Set your budget"));
        assert!(!card.contains("% used"));
    }
}
