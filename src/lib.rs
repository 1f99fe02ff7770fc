//! student-budget - a terminal expense tracker for students
//!
//! Records day-to-day expenses against a fixed set of categories, measures
//! each month's spending against a monthly budget, and summarises spending
//! by category and by day.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, money, months, categories, currencies, budget bands
//! - `storage`: JSON file storage
//! - `audit`: Audit log of every change
//! - `services`: Business logic layer
//! - `reports`: Category breakdown and spending trend
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use student_budget::config::{paths::BudgetPaths, settings::Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
