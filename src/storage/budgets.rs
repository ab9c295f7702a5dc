//! Budget repository for JSON storage
//!
//! Keeps every budget in memory and mirrors it to `budgets.json` after each
//! write. Implements [`PersistenceGateway`], so whole-record and
//! single-field writes both land here.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetId, BudgetRecord};

use super::file_io::{read_json, write_json_atomic};
use super::gateway::{BudgetField, PersistenceGateway};

/// On-disk shape of budgets.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<BudgetRecord>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, BudgetRecord>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk, replacing whatever is in memory
    pub fn load(&self) -> BudgetResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for record in file_data.budgets {
            budgets.insert(record.id, record);
        }
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> BudgetResult<()> {
        let file_data = BudgetData {
            budgets: self.list()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: BudgetId) -> BudgetResult<Option<BudgetRecord>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.get(&id).cloned())
    }

    /// Look a budget up by full UUID or `bud-` short form
    pub fn find(&self, identifier: &str) -> BudgetResult<BudgetRecord> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = budgets.values().filter(|b| b.id.matches(identifier));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record.clone()),
            (Some(_), Some(_)) => Err(BudgetError::Validation(format!(
                "ambiguous budget id: {}",
                identifier
            ))),
            (None, _) => Err(BudgetError::budget_not_found(identifier)),
        }
    }

    /// All budgets, ordered by name
    pub fn list(&self) -> BudgetResult<Vec<BudgetRecord>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    /// Budgets `email` can see: shared with them and not hidden from them
    pub fn visible_to(&self, email: &str) -> BudgetResult<Vec<BudgetRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| b.is_owner(email) || b.shared_emails().any(|e| e == email))
            .filter(|b| !b.hidden_from.iter().any(|e| e == email))
            .collect())
    }

    pub fn count(&self) -> BudgetResult<usize> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}

impl PersistenceGateway for BudgetRepository {
    fn write_full(&self, id: BudgetId, record: &BudgetRecord) -> BudgetResult<()> {
        {
            let mut budgets = self.budgets.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let mut stored = record.clone();
            stored.id = id;
            budgets.insert(id, stored);
        }
        self.save()
    }

    fn write_field(&self, id: BudgetId, field: BudgetField, value: Value) -> BudgetResult<()> {
        {
            let mut budgets = self.budgets.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let current = budgets
                .get(&id)
                .ok_or_else(|| BudgetError::budget_not_found(id.to_string()))?;

            let mut patched = serde_json::to_value(current)?;
            if let Value::Object(fields) = &mut patched {
                fields.insert(field.as_str().to_string(), value);
            }
            let updated: BudgetRecord = serde_json::from_value(patched).map_err(|e| {
                BudgetError::Validation(format!("Invalid value for {}: {}", field, e))
            })?;

            budgets.insert(id, updated);
        }
        self.save()
    }
}
