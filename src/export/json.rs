//! JSON Export functionality
//!
//! Exports settings and every expense with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub settings: Settings,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Summary figures for a quick look at an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_spent: Money,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    /// Snapshot storage and settings
    pub fn from_storage(storage: &Storage, settings: &Settings) -> BudgetResult<Self> {
        let expenses = storage.expenses.get_all()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            expenses,
            metadata,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
