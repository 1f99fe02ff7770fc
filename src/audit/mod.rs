//! Audit logging for student-budget
//!
//! Every change to an expense, the monthly budget or the user settings is
//! appended to a line-delimited JSON log (`audit.log`) with the state before
//! and after the change.
//!
//! - `AuditEntry`: one logged operation with timestamp, operation, entity
//!   and optional before/after snapshots.
//! - `AuditLogger`: appends entries and reads them back.
//! - `summarize_changes`: one-line description of what changed in an update.
//!
//! ```rust,ignore
//! use student_budget::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.description.clone()),
//!     &expense,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
