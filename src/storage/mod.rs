//! Storage layer for budget-share
//!
//! JSON file persistence with atomic writes, plus the gateway trait the
//! service layer writes through.

pub mod budgets;
pub mod file_io;
pub mod gateway;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use gateway::{BudgetField, PersistenceGateway};

use crate::audit::AuditLogger;
use crate::config::paths::BudgetSharePaths;
use crate::error::BudgetError;

/// Owns the repository and audit log for one data directory
pub struct Storage {
    paths: BudgetSharePaths,
    pub budgets: BudgetRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BudgetSharePaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budgets_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetSharePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.budgets.load()
    }
}
