//! Append-only audit log
//!
//! Each entry is one JSON object per line (JSONL), flushed as soon as it is
//! written.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> BudgetResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BudgetError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| BudgetError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> BudgetResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                BudgetError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                BudgetError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> BudgetResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Entries touching one budget, oldest first
    pub fn read_for(&self, entity_id: &str) -> BudgetResult<Vec<AuditEntry>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|entry| entry.entity_id == entity_id)
            .collect())
    }

    pub fn entry_count(&self) -> BudgetResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (TempDir, AuditLogger) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (temp_dir, logger)
    }

    fn entry(id: &str, operation: Operation) -> AuditEntry {
        AuditEntry::change(
            operation,
            EntityType::Budget,
            id,
            Some("Groceries".into()),
            &json!({"spent": 2500}),
            &json!({"spent": 0}),
        )
    }

    #[test]
    fn test_empty_log() {
        let (_temp_dir, logger) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_log_and_read_back() {
        let (_temp_dir, logger) = create_test_logger();
        logger.log(&entry("bud-1", Operation::Reset)).unwrap();
        logger.log(&entry("bud-2", Operation::Edit)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Reset);
        assert_eq!(entries[1].entity_id, "bud-2");

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_read_recent_and_filtered() {
        let (_temp_dir, logger) = create_test_logger();
        for (id, op) in [
            ("bud-1", Operation::Edit),
            ("bud-2", Operation::Share),
            ("bud-1", Operation::Reset),
        ] {
            logger.log(&entry(id, op)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].operation, Operation::Share);

        let for_one = logger.read_for("bud-1").unwrap();
        assert_eq!(for_one.len(), 2);
        assert_eq!(logger.read_recent(10).unwrap().len(), 3);
    }
}
