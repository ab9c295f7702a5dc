//! Custom error types for budget-share
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The first group of variants are input
//! validation failures the presentation layer recovers from locally; the
//! rest cover permissions, storage and configuration.

use thiserror::Error;

/// The main error type for budget-share operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// Budget name or amount text was blank
    #[error("Name and amount are both required")]
    EmptyField,

    /// Amount text could not be parsed as a decimal
    #[error("Amount is not a number: {0}")]
    NotNumeric(String),

    /// Amount was below the one cent floor
    #[error("Amount must be at least $0.01")]
    AmountTooSmall,

    /// Amount was above the five million ceiling
    #[error("Amount cannot exceed $5000000.00")]
    AmountTooLarge,

    /// Amount had non-zero digits past the cents place
    #[error("Amount cannot have more than two decimal places")]
    TooPrecise,

    /// Email text was blank
    #[error("Email address is required")]
    EmptyEmail,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The viewer is not allowed to perform the action
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A state machine was driven out of order
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Malformed data handed to the storage layer
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The change was written but its audit entry was not
    #[error("Saved {entity_id}, but the audit log could not be written: {reason}")]
    AuditFailed { entity_id: String, reason: String },
}

impl BudgetError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a shared-with email
    pub fn email_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Shared email",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the change reached storage despite the error
    ///
    /// Callers should not retry these.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::AuditFailed { .. })
    }

    /// Check if this is an input validation failure
    ///
    /// These are the errors a presentation layer answers by disabling the
    /// save action or showing a message.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyField
                | Self::NotNumeric(_)
                | Self::AmountTooSmall
                | Self::AmountTooLarge
                | Self::TooPrecise
                | Self::EmptyEmail
                | Self::NotFound { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-share operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
        assert_eq!(
            BudgetError::AmountTooLarge.to_string(),
            "Amount cannot exceed $5000000.00"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::email_not_found("a@x.com");
        assert_eq!(err.to_string(), "Shared email not found: a@x.com");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_classification() {
        assert!(BudgetError::EmptyField.is_validation());
        assert!(BudgetError::NotNumeric("abc".into()).is_validation());
        assert!(BudgetError::EmptyEmail.is_validation());
        assert!(BudgetError::budget_not_found("bud-1").is_validation());
        assert!(!BudgetError::Storage("disk full".into()).is_validation());
        assert!(!BudgetError::PermissionDenied("x".into()).is_validation());
        assert!(BudgetError::TooPrecise.is_validation());
    }

    #[test]
    fn test_audit_failure_is_persisted() {
        let err = BudgetError::AuditFailed {
            entity_id: "bud-1".into(),
            reason: "disk full".into(),
        };
        assert!(err.is_persisted());
        assert!(!err.is_validation());
        assert!(!BudgetError::Storage("disk full".into()).is_persisted());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
