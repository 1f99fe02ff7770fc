//! Export module for student-budget
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: settings and expenses, machine-readable
//! - YAML: the same content, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
