//! Text formatting helpers shared by every view

use chrono::NaiveDate;

use crate::models::{Money, Month};

/// Render an amount with a currency symbol and exactly two decimals.
///
/// No thousands separators; a negative amount puts the minus first
/// (`-£12.50`).
pub fn format_currency(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Date as shown in expense lists, e.g. "Jan 05, 2025"
pub fn format_expense_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Date in the user's configured strftime format.
///
/// Falls back to ISO form when the format string is not valid.
pub fn format_user_date(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Heading for a month, e.g. "January 2025"
pub fn format_month_heading(month: Month) -> String {
    month.long_name()
}

/// "1 expense", "3 expenses"
pub fn pluralize_expenses(count: usize) -> String {
    if count == 1 {
        "1 expense".to_string()
    } else {
        format!("{} expenses", count)
    }
}

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar of `width` cells filled in proportion to value / max
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Single separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to at most `max_chars` characters, ending in "..." when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
