//! Audit logging for budget-share
//!
//! Every write the service layer makes (edit, reset, share, unshare) is
//! recorded with before/after values in an append-only JSONL file.
//!
//! - `AuditEntry`: one logged write.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: short summary of what changed between two snapshots.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
