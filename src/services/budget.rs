//! Budget service
//!
//! The handoff between a presentation layer and storage. Each call takes
//! the record the viewer is looking at, runs the editor or sharing rules on
//! it, writes the result through the gateway and records an audit entry.

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetRecord;
use crate::services::editor::BudgetEditor;
use crate::services::sharing::SharingList;
use crate::storage::{BudgetField, PersistenceGateway};

/// Service for budget edits and sharing changes
pub struct BudgetService<'a, G: PersistenceGateway> {
    gateway: &'a G,
    audit: Option<&'a AuditLogger>,
    editor: BudgetEditor,
    sharing: SharingList,
}

impl<'a, G: PersistenceGateway> BudgetService<'a, G> {
    /// Create a service that writes through `gateway`, without auditing
    pub fn new(gateway: &'a G) -> Self {
        Self {
            gateway,
            audit: None,
            editor: BudgetEditor::new(),
            sharing: SharingList::new(),
        }
    }

    /// Record every successful write in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn editor(&self) -> &BudgetEditor {
        &self.editor
    }

    pub fn sharing(&self) -> &SharingList {
        &self.sharing
    }

    /// Save a new name and amount, overwriting the whole record
    pub fn save_edit(
        &self,
        record: &BudgetRecord,
        viewer_email: &str,
        name: &str,
        amount_text: &str,
    ) -> BudgetResult<BudgetRecord> {
        let updated = self.editor.edit(record, name, amount_text)?;

        self.gateway.write_full(updated.id, &updated)?;
        self.audit(
            AuditEntry::change(
                Operation::Edit,
                EntityType::Budget,
                updated.id.to_string(),
                Some(updated.name.clone()),
                record,
                &updated,
            )
            .by(viewer_email),
        )?;

        Ok(updated)
    }

    /// Zero the spend and clear history, overwriting the whole record
    pub fn reset(&self, record: &BudgetRecord, viewer_email: &str) -> BudgetResult<BudgetRecord> {
        if !self.editor.can_reset(record, viewer_email) {
            return Err(BudgetError::PermissionDenied(format!(
                "only the owner can reset {}",
                record.name
            )));
        }

        let updated = self.editor.apply_reset(record);

        self.gateway.write_full(updated.id, &updated)?;
        self.audit(
            AuditEntry::change(
                Operation::Reset,
                EntityType::Budget,
                updated.id.to_string(),
                Some(updated.name.clone()),
                record,
                &updated,
            )
            .by(viewer_email),
        )?;

        Ok(updated)
    }

    /// Share the budget with `email`, patching only `sharedWith`
    pub fn share(
        &self,
        record: &BudgetRecord,
        viewer_email: &str,
        email: &str,
    ) -> BudgetResult<BudgetRecord> {
        if !self.sharing.can_share(record, viewer_email) {
            return Err(BudgetError::PermissionDenied(format!(
                "only the owner can share {}",
                record.name
            )));
        }

        let updated = self.sharing.add_email(record, email)?;
        self.write_shared_with(record, &updated, Operation::Share, viewer_email)?;
        Ok(updated)
    }

    /// Stop sharing with `email`, patching only `sharedWith`
    pub fn unshare(
        &self,
        record: &BudgetRecord,
        viewer_email: &str,
        email: &str,
    ) -> BudgetResult<BudgetRecord> {
        if !self.sharing.can_edit(record, viewer_email, email) {
            return Err(BudgetError::PermissionDenied(format!(
                "{} cannot remove {}",
                viewer_email, email
            )));
        }

        let updated = self.sharing.remove_email(record, email)?;
        self.write_shared_with(record, &updated, Operation::Unshare, viewer_email)?;
        Ok(updated)
    }

    /// Persist a shared-with list already computed elsewhere, such as the
    /// outcome of a confirmed [`crate::services::ShareSession`] removal
    pub fn commit_removal(
        &self,
        before: &BudgetRecord,
        after: &BudgetRecord,
        viewer_email: &str,
    ) -> BudgetResult<()> {
        self.write_shared_with(before, after, Operation::Unshare, viewer_email)
    }

    fn write_shared_with(
        &self,
        before: &BudgetRecord,
        after: &BudgetRecord,
        operation: Operation,
        viewer_email: &str,
    ) -> BudgetResult<()> {
        let value = BudgetField::SharedWith.value_of(after)?;
        self.gateway
            .write_field(after.id, BudgetField::SharedWith, value)?;

        self.audit(
            AuditEntry::change(
                operation,
                EntityType::SharingList,
                after.id.to_string(),
                Some(after.name.clone()),
                &before.shared_with,
                &after.shared_with,
            )
            .by(viewer_email),
        )
    }

    /// Runs after the gateway write, so failures come back as
    /// [`BudgetError::AuditFailed`]
    fn audit(&self, entry: AuditEntry) -> BudgetResult<()> {
        let Some(logger) = self.audit else {
            return Ok(());
        };

        logger.log(&entry).map_err(|e| BudgetError::AuditFailed {
            entity_id: entry.entity_id.clone(),
            reason: e.to_string(),
        })
    }
}
