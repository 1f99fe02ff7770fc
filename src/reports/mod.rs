//! Reports module for student-budget
//!
//! Aggregation of expenses into category totals and daily totals, and the
//! category breakdown and spending trend reports built on them.

pub mod aggregate;
pub mod category_breakdown;
pub mod spending_trend;

pub use aggregate::{
    calculate_category_totals, calculate_daily_totals, sort_expenses_by_date, CategoryTotal,
    DailyTotal, TREND_WINDOW_DAYS,
};
pub use category_breakdown::{CategoryBreakdownReport, CategoryShare};
pub use spending_trend::SpendingTrendReport;
