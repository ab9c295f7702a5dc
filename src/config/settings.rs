//! User settings for budget-share
//!
//! Who the current user is, how amounts are shown, and whether writes are
//! audited. Stored as `config.json` in the base directory.

use serde::{Deserialize, Serialize};

use super::paths::BudgetSharePaths;
use crate::error::BudgetError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Email used as the viewer when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Append every write to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user_email: None,
            currency_symbol: default_currency(),
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetSharePaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            // Not saved until the caller asks
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn save(&self, paths: &BudgetSharePaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
        assert!(settings.user_email.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetSharePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.user_email = Some("a@x.com".into());
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetSharePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"user_email": "b@x.com"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.user_email.as_deref(), Some("b@x.com"));
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetSharePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(BudgetError::Config(_))
        ));
    }
}
