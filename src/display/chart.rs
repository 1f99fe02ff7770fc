//! Text charts for the category breakdown and the daily trend

use crate::reports::{CategoryBreakdownReport, SpendingTrendReport};

use super::format::{
    double_separator, format_bar, format_month_heading, format_percentage, pluralize_expenses,
    separator, truncate,
};
use super::messages::{NO_SPENDING_DATA, NO_SPENDING_TREND};

const CHART_WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 18;

/// Render the category breakdown as a legend with proportional bars.
///
/// Shares below the label threshold are drawn without a percentage.
pub fn format_category_chart(report: &CategoryBreakdownReport, symbol: &str) -> String {
    if report.is_empty() {
        return NO_SPENDING_DATA.render();
    }

    let max = report
        .rows
        .first()
        .map(|r| r.total.total.cents() as f64)
        .unwrap_or(0.0);

    let mut output = String::new();
    output.push_str(&format!(
        "📊 Spending by Category: {}\n",
        format_month_heading(report.month)
    ));
    output.push_str(&double_separator(CHART_WIDTH));
    output.push('\n');

    for row in &report.rows {
        let label = if row.shows_label() {
            format_percentage(row.percentage)
        } else {
            String::new()
        };

        // Emoji last: their terminal width varies, so nothing is aligned after them
        output.push_str(&format!(
            "{:<nw$} {} {:>10} {:>5}  {:<12} {}\n",
            truncate(row.total.name, NAME_WIDTH),
            format_bar(row.total.total.cents() as f64, max, BAR_WIDTH),
            row.total.total.format_with_symbol(symbol),
            label,
            pluralize_expenses(row.total.count),
            row.total.emoji,
            nw = NAME_WIDTH,
        ));
    }

    output.push_str(&separator(CHART_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total: {} across {}\n",
        report.total_spent.format_with_symbol(symbol),
        pluralize_expenses(report.expense_count)
    ));

    output
}

/// Render the daily trend as one bar per day, oldest first, with summary
/// statistics underneath
pub fn format_trend_chart(report: &SpendingTrendReport, symbol: &str) -> String {
    if report.is_empty() {
        return NO_SPENDING_TREND.render();
    }

    let max = report
        .highest_day()
        .map(|d| d.amount.cents() as f64)
        .unwrap_or(0.0);

    let mut output = String::new();
    output.push_str("📈 Daily Spending Trend\n");
    output.push_str(&double_separator(CHART_WIDTH));
    output.push('\n');

    for day in &report.days {
        output.push_str(&format!(
            "{}  {} {:>10}  ({})\n",
            day.label(),
            format_bar(day.amount.cents() as f64, max, BAR_WIDTH),
            day.amount.format_with_symbol(symbol),
            pluralize_expenses(day.count)
        ));
    }

    output.push_str(&separator(CHART_WIDTH));
    output.push('\n');
    output.push_str(&format!("Total Days:  {}\n", report.day_count()));
    output.push_str(&format!(
        "Avg/Day:     {}\n",
        report.average_per_day().format_with_symbol(symbol)
    ));
    if let Some(day) = report.highest_day() {
        output.push_str(&format!(
            "Highest Day: {} ({})\n",
            day.amount.format_with_symbol(symbol),
            day.label()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, Month};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, day: u32) -> Expense {
        Expense::new(
            "item",
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_category_chart() {
        let expenses = vec![expense(9700, "food", 1), expense(300, "health", 2)];
        let report =
            CategoryBreakdownReport::from_expenses(Month::new(2025, 1).unwrap(), &expenses);
        let chart = format_category_chart(&report, "£");

        assert!(chart.contains("January 2025"));
        let food = chart.lines().find(|l| l.contains("Food & Groceries")).unwrap();
        assert!(food.contains("£97.00"));
        assert!(food.contains("97%"));

        let health = chart.lines().find(|l| l.contains("Health & Fitness")).unwrap();
        assert!(health.contains("£3.00"));
        assert!(!health.contains('%'));
        assert!(health.contains("1 expense"));

        assert!(chart.contains("Total: £100.00 across 2 expenses"));
    }

    #[test]
    fn test_category_chart_columns_line_up() {
        let expenses = vec![
            expense(5000, "shopping", 1),
            expense(3000, "food", 2),
            expense(1500, "entertainment", 3),
            expense(500, "transport", 4),
        ];
        let report =
            CategoryBreakdownReport::from_expenses(Month::new(2025, 1).unwrap(), &expenses);
        let chart = format_category_chart(&report, "£");

        let rows: Vec<&str> = chart
            .lines()
            .filter(|l| l.contains('£') && !l.starts_with("Total"))
            .collect();
        assert_eq!(rows.len(), 4);

        // Bar and amount columns end at the same character offset on every row
        let amount_end = NAME_WIDTH + 1 + BAR_WIDTH + 1 + 10;
        for (row, amount) in rows.iter().zip(["£50.00", "£30.00", "£15.00", "£5.00"]) {
            let bar_start = row.chars().position(|c| c == '█' || c == '░').unwrap();
            assert_eq!(bar_start, NAME_WIDTH + 1);

            let head: String = row.chars().take(amount_end).collect();
            assert!(head.ends_with(amount), "{:?}", row);
        }

        // Emoji are trailing so their width cannot shift the columns
        assert!(rows[0].trim_end().ends_with("🛍️"));
    }

    #[test]
    fn test_trend_chart() {
        let expenses = vec![expense(1000, "food", 2), expense(2500, "food", 3)];
        let report = SpendingTrendReport::from_expenses(&expenses);
        let chart = format_trend_chart(&report, "$");

        assert!(chart.contains("Jan 02"));
        assert!(chart.contains("Total Days:  2"));
        assert!(chart.contains("Avg/Day:     $17.50"));
        assert!(chart.contains("Highest Day: $25.00 (Jan 03)"));
    }

    #[test]
    fn test_empty_charts() {
        let month = Month::new(2025, 1).unwrap();
        assert!(format_category_chart(&CategoryBreakdownReport::from_expenses(month, &[]), "£")
            .contains("No spending data yet"));
        assert!(format_trend_chart(&SpendingTrendReport::from_expenses(&[]), "£")
            .contains("No spending trend yet"));
    }
}
