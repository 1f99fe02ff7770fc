//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export file format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Expenses only, one row each
    Csv,
    /// Settings and expenses
    Json,
    /// Settings and expenses
    Yaml,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// File to write
    pub path: PathBuf,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let file = File::create(&args.path).map_err(|e| {
        BudgetError::Export(format!("Cannot create {}: {}", args.path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(storage, &mut writer)?,
        ExportFormat::Json => export_full_json(storage, settings, &mut writer, true)?,
        ExportFormat::Yaml => export_full_yaml(storage, settings, &mut writer)?,
    }
    writer.flush()?;

    println!(
        "Exported {} expense(s) to {}",
        storage.expenses.count()?,
        args.path.display()
    );

    Ok(())
}
