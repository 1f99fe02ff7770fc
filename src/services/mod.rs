//! Service layer for student-budget
//!
//! Business logic on top of the storage layer: validation, persistence and
//! audit logging of every change.

pub mod budget;
pub mod expense;
pub mod settings;

pub use budget::{BudgetService, MonthlyBudgetSummary};
pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService, UpdateExpenseInput};
pub use settings::{OnboardingInput, SettingsService};
