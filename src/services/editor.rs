//! Budget editor
//!
//! Validates the name/amount pair typed on the edit screen and computes the
//! next version of a budget record for an edit or a reset. Nothing here
//! touches storage; the caller decides what to write.

use crate::error::{BudgetError, BudgetResult};
use crate::input::accepts_amount_text;
use crate::models::{BudgetRecord, LogEntry, Money};
use crate::services::prompt::Confirmation;

/// Smallest ceiling the editor accepts ($0.01)
pub const MIN_AMOUNT: Money = Money::from_cents(1);

/// Largest ceiling the editor accepts ($5,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_dollars_cents(5_000_000, 0);

/// Edit and reset logic for a single budget
#[derive(Debug, Clone, Copy)]
pub struct BudgetEditor {
    min_amount: Money,
    max_amount: Money,
}

impl Default for BudgetEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetEditor {
    /// Create an editor with the standard amount limits
    pub fn new() -> Self {
        Self {
            min_amount: MIN_AMOUNT,
            max_amount: MAX_AMOUNT,
        }
    }

    /// Check the raw name and amount text
    ///
    /// Returns the parsed amount when both are acceptable. Checks run in
    /// order: blank fields, non-numeric amount, the amount range, then
    /// precision. The range is checked against the text as typed, so
    /// "5000000.001" is too large rather than rounded down to the ceiling.
    pub fn validate_input(&self, name: &str, amount_text: &str) -> BudgetResult<Money> {
        let amount_text = amount_text.trim();
        if name.trim().is_empty() || amount_text.is_empty() {
            return Err(BudgetError::EmptyField);
        }

        if !accepts_amount_text(amount_text) {
            return Err(BudgetError::NotNumeric(amount_text.to_string()));
        }
        let amount = Money::parse(amount_text)
            .map_err(|_| BudgetError::NotNumeric(amount_text.to_string()))?;

        if amount < self.min_amount {
            return Err(BudgetError::AmountTooSmall);
        }
        // Money::parse truncates to cents
        let has_sub_cents = amount_text
            .split_once('.')
            .is_some_and(|(_, frac)| frac.chars().skip(2).any(|c| c != '0'));

        if amount > self.max_amount || (amount == self.max_amount && has_sub_cents) {
            return Err(BudgetError::AmountTooLarge);
        }
        if has_sub_cents {
            return Err(BudgetError::TooPrecise);
        }

        Ok(amount)
    }

    /// Should the save action be enabled for this input?
    pub fn can_save(&self, name: &str, amount_text: &str) -> bool {
        self.validate_input(name, amount_text).is_ok()
    }

    /// Replace name and ceiling, recomputing what is left
    ///
    /// Inputs are expected to have passed [`Self::validate_input`].
    pub fn apply_edit(&self, record: &BudgetRecord, name: &str, amount: Money) -> BudgetRecord {
        let mut next = record.clone();
        next.name = name.trim().to_string();
        next.set_amount = amount;
        next.recompute_left();
        next
    }

    /// Validate and apply in one step
    pub fn edit(
        &self,
        record: &BudgetRecord,
        name: &str,
        amount_text: &str,
    ) -> BudgetResult<BudgetRecord> {
        let amount = self.validate_input(name, amount_text)?;
        Ok(self.apply_edit(record, name, amount))
    }

    /// Zero the spend and clear both logs
    ///
    /// Name, owner and sharing fields are carried over untouched.
    pub fn apply_reset(&self, record: &BudgetRecord) -> BudgetRecord {
        let mut next = record.clone();
        next.spent = Money::zero();
        next.history = LogEntry::empty_log();
        next.user_date = LogEntry::empty_log();
        next.recompute_left();
        next
    }

    /// Only the owner may reset a budget
    pub fn can_reset(&self, record: &BudgetRecord, viewer_email: &str) -> bool {
        record.is_owner(viewer_email)
    }

    /// Text the amount field starts with when the edit screen opens
    pub fn format_amount_for_entry(&self, amount: Money) -> String {
        amount.format_plain()
    }

    /// Confirmation shown before a reset
    pub fn reset_prompt(&self, record: &BudgetRecord) -> Confirmation {
        Confirmation::reset(&record.name)
    }
}
