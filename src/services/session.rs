//! Share screen state machine
//!
//! A delete gesture on a row moves the screen from `Viewing` to `Editing`
//! while the removal is confirmed. Confirming or cancelling both land back
//! in `Viewing`.

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetRecord;
use crate::services::prompt::Confirmation;
use crate::services::sharing::SharingList;

/// Where the share screen currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShareState {
    #[default]
    Viewing,
    /// Waiting for the viewer to confirm removing `email`
    Editing { email: String },
}

/// How an `Editing` episode ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The email was removed; persist `record.shared_with`
    Removed { email: String, record: BudgetRecord },
    Cancelled,
}

/// Per-screen removal flow for one viewer
#[derive(Debug, Clone)]
pub struct ShareSession {
    viewer_email: String,
    state: ShareState,
    sharing: SharingList,
}

impl ShareSession {
    pub fn new(viewer_email: impl Into<String>) -> Self {
        Self {
            viewer_email: viewer_email.into(),
            state: ShareState::Viewing,
            sharing: SharingList::new(),
        }
    }

    pub fn state(&self) -> &ShareState {
        &self.state
    }

    pub fn viewer_email(&self) -> &str {
        &self.viewer_email
    }

    /// Start removing `target_email` and return the prompt to show
    pub fn begin_remove(
        &mut self,
        record: &BudgetRecord,
        target_email: &str,
    ) -> BudgetResult<Confirmation> {
        if let ShareState::Editing { email } = &self.state {
            return Err(BudgetError::InvalidState(format!(
                "already confirming removal of {}",
                email
            )));
        }
        let target_email = target_email.trim();
        if !record.shared_with.iter().any(|email| email == target_email) {
            return Err(BudgetError::email_not_found(target_email));
        }
        if !self.sharing.can_edit(record, &self.viewer_email, target_email) {
            return Err(BudgetError::PermissionDenied(format!(
                "{} cannot remove {}",
                self.viewer_email, target_email
            )));
        }

        self.state = ShareState::Editing {
            email: target_email.to_string(),
        };
        Ok(self.sharing.removal_prompt(target_email))
    }

    /// Go ahead with the pending removal
    pub fn confirm(&mut self, record: &BudgetRecord) -> BudgetResult<ShareOutcome> {
        let email = match std::mem::take(&mut self.state) {
            ShareState::Editing { email } => email,
            ShareState::Viewing => {
                return Err(BudgetError::InvalidState(
                    "no removal is waiting for confirmation".into(),
                ))
            }
        };

        let record = self.sharing.remove_email(record, &email)?;
        Ok(ShareOutcome::Removed { email, record })
    }

    /// Abandon the pending removal, if any
    pub fn cancel(&mut self) -> ShareOutcome {
        self.state = ShareState::Viewing;
        ShareOutcome::Cancelled
    }
}
