//! Budget identifier
//!
//! Budgets are keyed by an opaque UUID. The short display form is what the
//! CLI prints and accepts back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "bud-";

/// Opaque identifier of a stored budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetId(Uuid);

impl BudgetId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The short `bud-xxxxxxxx` form
    pub fn short(&self) -> String {
        let full = self.0.simple().to_string();
        format!("{}{}", DISPLAY_PREFIX, &full[..8])
    }

    /// Does `s` name this budget, either in full or by its short form?
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim();
        if let Ok(uuid) = Uuid::parse_str(s) {
            return uuid == self.0;
        }
        let short = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        !short.is_empty() && self.0.simple().to_string().starts_with(short)
    }
}

impl Default for BudgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BudgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl From<Uuid> for BudgetId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for BudgetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
