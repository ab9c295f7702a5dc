//! Path management for budget-share
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_SHARE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-share` or `~/.config/budget-share`
//! 3. Windows: `%APPDATA%\budget-share`

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_SHARE_DATA_DIR";

const APP_DIR: &str = "budget-share";

/// All paths used by budget-share
#[derive(Debug, Clone)]
pub struct BudgetSharePaths {
    base_dir: PathBuf,
}

impl BudgetSharePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };
        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base>/data/`
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// `<base>/config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// `<base>/audit.log`
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// `<base>/data/budgets.json`
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| BudgetError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}
