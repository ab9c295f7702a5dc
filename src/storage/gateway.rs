//! Persistence gateway contract
//!
//! The core never owns storage. It hands finished records to a gateway,
//! either as a whole-record overwrite or as a single-field patch.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetId, BudgetRecord};

/// A top-level field of a stored budget, by its wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    Name,
    CreatedBy,
    SetAmount,
    Spent,
    Left,
    History,
    UserDate,
    IsShared,
    SharedWith,
    HiddenFrom,
}

impl BudgetField {
    pub const ALL: [BudgetField; 10] = [
        Self::Name,
        Self::CreatedBy,
        Self::SetAmount,
        Self::Spent,
        Self::Left,
        Self::History,
        Self::UserDate,
        Self::IsShared,
        Self::SharedWith,
        Self::HiddenFrom,
    ];

    /// Key used in the serialized record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedBy => "createdBy",
            Self::SetAmount => "setAmount",
            Self::Spent => "spent",
            Self::Left => "left",
            Self::History => "history",
            Self::UserDate => "userDate",
            Self::IsShared => "isShared",
            Self::SharedWith => "sharedWith",
            Self::HiddenFrom => "hiddenFrom",
        }
    }

    /// Current value of this field on `record`, in wire form
    pub fn value_of(&self, record: &BudgetRecord) -> BudgetResult<Value> {
        let mut value = serde_json::to_value(record)?;
        value
            .get_mut(self.as_str())
            .map(Value::take)
            .ok_or_else(|| BudgetError::Validation(format!("record has no field {}", self)))
    }
}

impl fmt::Display for BudgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetField {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| BudgetError::Validation(format!("unknown budget field: {}", s)))
    }
}

/// Where finished budget records are written
pub trait PersistenceGateway {
    /// Overwrite every field of the budget stored under `id`
    fn write_full(&self, id: BudgetId, record: &BudgetRecord) -> BudgetResult<()>;

    /// Overwrite a single field of the budget stored under `id`
    fn write_field(&self, id: BudgetId, field: BudgetField, value: Value) -> BudgetResult<()>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for &G {
    fn write_full(&self, id: BudgetId, record: &BudgetRecord) -> BudgetResult<()> {
        (**self).write_full(id, record)
    }

    fn write_field(&self, id: BudgetId, field: BudgetField, value: Value) -> BudgetResult<()> {
        (**self).write_field(id, field, value)
    }
}
