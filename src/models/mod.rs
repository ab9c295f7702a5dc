//! Core data models for budget-share
//!
//! The budget record and the value types it is built from.

pub mod ids;
pub mod log_entry;
pub mod money;
pub mod record;

pub use ids::BudgetId;
pub use log_entry::{LogEntry, NONE_SENTINEL};
pub use money::{Money, MoneyParseError};
pub use record::BudgetRecord;
