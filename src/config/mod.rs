//! Configuration module for budget-share
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetSharePaths;
pub use settings::Settings;
