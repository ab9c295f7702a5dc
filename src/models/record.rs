//! Budget record model
//!
//! The persisted shape of a single budget: its ceiling, what has been spent
//! against it, the spend logs, and who it is shared with.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::log_entry::{LogEntry, NONE_SENTINEL};
use super::money::Money;

/// A budget as stored by the persistence gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    /// Opaque identifier the gateway keys the record by
    pub id: BudgetId,

    /// Display name
    pub name: String,

    /// Email of the owner
    pub created_by: String,

    /// Budget ceiling
    pub set_amount: Money,

    /// Cumulative spend
    pub spent: Money,

    /// Always `set_amount - spent`
    pub left: Money,

    /// Spend log, oldest first
    #[serde(default = "LogEntry::empty_log")]
    pub history: Vec<LogEntry>,

    /// Date-tagged entries, oldest first
    #[serde(default = "LogEntry::empty_log")]
    pub user_date: Vec<LogEntry>,

    #[serde(default)]
    pub is_shared: bool,

    /// Emails with access, owner first
    #[serde(default)]
    pub shared_with: Vec<String>,

    /// Emails the budget is suppressed for
    #[serde(default = "sentinel_list")]
    pub hidden_from: Vec<String>,
}

fn sentinel_list() -> Vec<String> {
    vec![NONE_SENTINEL.to_string()]
}

impl BudgetRecord {
    /// Create a fresh, unshared budget owned by `created_by`
    pub fn new(name: impl Into<String>, created_by: impl Into<String>, set_amount: Money) -> Self {
        let created_by = created_by.into();
        Self {
            id: BudgetId::new(),
            name: name.into(),
            shared_with: vec![created_by.clone()],
            created_by,
            set_amount,
            spent: Money::zero(),
            left: set_amount,
            history: LogEntry::empty_log(),
            user_date: LogEntry::empty_log(),
            is_shared: false,
            hidden_from: sentinel_list(),
        }
    }

    /// Is `email` the owner of this budget?
    pub fn is_owner(&self, email: &str) -> bool {
        self.created_by == email
    }

    /// Recompute `left` from the ceiling and spend
    pub fn recompute_left(&mut self) {
        self.left = self.set_amount - self.spent;
    }

    /// Does `left` agree with `set_amount - spent`?
    pub fn is_balanced(&self) -> bool {
        self.left == self.set_amount - self.spent
    }

    /// Shared-with entries that are real emails
    pub fn shared_emails(&self) -> impl Iterator<Item = &str> {
        self.shared_with
            .iter()
            .map(String::as_str)
            .filter(|email| *email != NONE_SENTINEL)
    }

    /// True when the shared-with list holds no real emails
    pub fn sharing_is_empty(&self) -> bool {
        self.shared_emails().next().is_none()
    }

    pub fn has_history(&self) -> bool {
        !LogEntry::is_empty_log(&self.history)
    }
}

impl fmt::Display for BudgetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} spent, {} left",
            self.name, self.spent, self.set_amount, self.left
        )
    }
}
