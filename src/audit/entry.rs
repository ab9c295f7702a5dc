//! Audit entry data structures
//!
//! One entry per successful write: what was done, to which budget, and the
//! values before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of write that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Name and ceiling changed
    Edit,
    /// Spend and logs cleared
    Reset,
    /// Email added to the shared-with list
    Share,
    /// Email removed from the shared-with list
    Unshare,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Edit => write!(f, "EDIT"),
            Operation::Reset => write!(f, "RESET"),
            Operation::Share => write!(f, "SHARE"),
            Operation::Unshare => write!(f, "UNSHARE"),
        }
    }
}

/// Which part of a budget an entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// The whole record (full overwrite)
    Budget,
    /// Only the shared-with list (field patch)
    SharingList,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::SharingList => write!(f, "SharingList"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the write happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Budget the write targeted
    pub entity_id: String,

    /// Budget name at the time of the write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Email of whoever made the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Record a change from `before` to `after`
    pub fn change<T: Serialize>(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            actor: None,
            before,
            after,
            diff_summary,
        }
    }

    /// Attach the acting user's email
    pub fn by(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }
        if let Some(actor) = &self.actor {
            output.push_str(&format!(" by {}", actor));
        }
        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
