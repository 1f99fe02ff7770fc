//! Core data models for the student budget tracker
//!
//! Expenses, the fixed category and currency tables, money amounts, months
//! and the budget status bands.

pub mod budget;
pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::{evaluate_budget, BudgetBand, BudgetStatus, BUDGET_BANDS, DEFAULT_MONTHLY_BUDGET};
pub use category::{lookup_category, resolve_category, Category, CATEGORIES};
pub use currency::{find_currency, lookup_currency, Currency, CurrencyCode, CURRENCIES};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MAX_AMOUNT};
pub use month::Month;
