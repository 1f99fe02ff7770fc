//! Display formatting for terminal output
//!
//! Plain-text rendering of expenses, the budget status card, the category
//! and trend charts, and the reference tables.

pub mod budget;
pub mod chart;
pub mod expense;
pub mod format;
pub mod messages;
pub mod tables;

pub use budget::format_budget_status;
pub use chart::{format_category_chart, format_trend_chart};
pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use format::format_currency;
pub use tables::{format_category_table, format_currency_table};
