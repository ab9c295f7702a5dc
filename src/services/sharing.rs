//! Sharing list management
//!
//! Who may see a budget is the ordered `shared_with` list on the record.
//! The owner adds and removes guests; a guest may only remove themselves.
//! Results are meant to be written back as a single-field patch.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, NONE_SENTINEL};
use crate::services::prompt::Confirmation;

/// One row of the shared-with list as a given viewer sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedEntry {
    pub email: String,
    pub is_owner: bool,
    pub is_dimmed: bool,
    /// Whether the viewer may remove this row
    pub removable: bool,
}

impl SharedEntry {
    /// Text for the row, with the owner marked
    pub fn label(&self) -> String {
        if self.is_owner {
            format!("{} (Owner)", self.email)
        } else {
            self.email.clone()
        }
    }
}

/// What the share screen should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedListView {
    /// Nothing is shared; hide the list and its heading
    Hidden,
    Entries(Vec<SharedEntry>),
}

impl SharedListView {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Rows to render, empty when hidden
    pub fn entries(&self) -> &[SharedEntry] {
        match self {
            Self::Hidden => &[],
            Self::Entries(entries) => entries,
        }
    }
}

/// Rules for the shared-with list of a budget
#[derive(Debug, Clone, Copy, Default)]
pub struct SharingList;

impl SharingList {
    pub fn new() -> Self {
        Self
    }

    /// May `viewer_email` remove `target_email` from the list?
    ///
    /// The owner may remove anyone but themselves. Anyone else may only
    /// remove their own entry.
    pub fn can_edit(&self, record: &BudgetRecord, viewer_email: &str, target_email: &str) -> bool {
        let target_email = target_email.trim();
        if record.is_owner(viewer_email) {
            !record.is_owner(target_email)
        } else {
            target_email == viewer_email
        }
    }

    /// Only the owner may add emails
    pub fn can_share(&self, record: &BudgetRecord, viewer_email: &str) -> bool {
        record.is_owner(viewer_email)
    }

    /// Hint shown above the email field
    pub fn share_label(&self, record: &BudgetRecord, viewer_email: &str) -> &'static str {
        if self.can_share(record, viewer_email) {
            "Add email address to share"
        } else {
            "Only owner can share"
        }
    }

    /// True when nobody but the owner is listed yet, so the email field
    /// should take focus straight away
    pub fn wants_first_email(&self, record: &BudgetRecord) -> bool {
        record.shared_with.len() == 1
    }

    /// Append `new_email` to the shared-with list
    ///
    /// Duplicates are kept, and so is a `none` placeholder; views skip it.
    pub fn add_email(&self, record: &BudgetRecord, new_email: &str) -> BudgetResult<BudgetRecord> {
        let new_email = new_email.trim();
        if new_email.is_empty() {
            return Err(BudgetError::EmptyEmail);
        }

        let mut next = record.clone();
        next.shared_with.push(new_email.to_string());
        Ok(next)
    }

    /// Remove the first entry equal to `target_email`
    ///
    /// The target is trimmed the same way [`Self::add_email`] trims.
    pub fn remove_email(
        &self,
        record: &BudgetRecord,
        target_email: &str,
    ) -> BudgetResult<BudgetRecord> {
        let target_email = target_email.trim();
        let index = record
            .shared_with
            .iter()
            .position(|email| email == target_email)
            .ok_or_else(|| BudgetError::email_not_found(target_email))?;

        let mut next = record.clone();
        next.shared_with.remove(index);
        Ok(next)
    }

    /// The list as `viewer_email` should see it
    ///
    /// The owner's row is always marked and dimmed. The owner sees every
    /// other row undimmed; a guest sees only their own row undimmed.
    pub fn visible_entries(&self, record: &BudgetRecord, viewer_email: &str) -> SharedListView {
        if record.sharing_is_empty() {
            return SharedListView::Hidden;
        }

        let viewer_is_owner = record.is_owner(viewer_email);
        let entries = record
            .shared_emails()
            .map(|email| {
                let is_owner = record.is_owner(email);
                let is_dimmed = is_owner || (!viewer_is_owner && email != viewer_email);
                SharedEntry {
                    email: email.to_string(),
                    is_owner,
                    is_dimmed,
                    removable: self.can_edit(record, viewer_email, email),
                }
            })
            .collect();

        SharedListView::Entries(entries)
    }

    /// Confirmation shown before removing `target_email`
    pub fn removal_prompt(&self, target_email: &str) -> Confirmation {
        Confirmation::remove_email(target_email)
    }
}
