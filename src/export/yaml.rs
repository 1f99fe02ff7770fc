//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    let header = format!(
        "# student-budget export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
