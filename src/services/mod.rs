//! Service layer for budget-share
//!
//! `BudgetEditor` and `SharingList` are pure: they take a record and return
//! the next one. `BudgetService` is where those results are written out.

pub mod budget;
pub mod editor;
pub mod prompt;
pub mod session;
pub mod sharing;

pub use budget::BudgetService;
pub use editor::{BudgetEditor, MAX_AMOUNT, MIN_AMOUNT};
pub use prompt::Confirmation;
pub use session::{ShareOutcome, ShareSession, ShareState};
pub use sharing::{SharedEntry, SharedListView, SharingList};
