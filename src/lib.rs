//! budget-share - budget editing and sharing core
//!
//! This library holds the domain logic behind two screens of a shared
//! budgeting app: editing a budget's name and amount (or resetting its
//! spend), and sharing a budget with other users by email. The logic is
//! kept apart from any UI and from the backend that stores budgets.
//!
//! # Architecture
//!
//! - `models`: the budget record and its value types
//! - `input`: the filtered amount entry field
//! - `services`: editor and sharing rules, the share-screen state machine,
//!   and the service that writes results out
//! - `storage`: the persistence gateway trait and a JSON file implementation
//! - `audit`: append-only log of every write
//! - `config`: path resolution and user settings
//! - `cli` / `display`: the command-line front end
//!
//! # Example
//!
//! ```
//! use budget_share::models::{BudgetRecord, Money};
//! use budget_share::services::{BudgetEditor, SharingList};
//!
//! let mut record = BudgetRecord::new("Groceries", "a@x.com", Money::from_cents(10000));
//! record.spent = Money::from_cents(2500);
//! record.recompute_left();
//!
//! let editor = BudgetEditor::new();
//! let edited = editor.edit(&record, "Food", "150.00").unwrap();
//! assert_eq!(edited.left, Money::from_cents(12500));
//!
//! let shared = SharingList::new().add_email(&edited, "b@x.com").unwrap();
//! assert_eq!(shared.shared_with, vec!["a@x.com", "b@x.com"]);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
