//! Display formatting for terminal output

pub mod budget;
pub mod sharing;

pub use budget::{format_budget_details, format_budget_list};
pub use sharing::format_shared_list;
