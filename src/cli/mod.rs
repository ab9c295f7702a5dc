//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. The CLI is only a
//! presentation layer: it collects raw strings, calls the core, and prints
//! what comes back.

pub mod budget;
pub mod share;

pub use budget::{handle_budget_command, BudgetCommands};
pub use share::{handle_share_command, ShareCommands};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetService;
use crate::storage::{BudgetRepository, Storage};

/// Build a service over the repository, audited if enabled in settings
fn service_for<'a>(
    storage: &'a Storage,
    settings: &Settings,
) -> BudgetService<'a, BudgetRepository> {
    let service = BudgetService::new(&storage.budgets);
    if settings.audit_enabled {
        service.with_audit(&storage.audit)
    } else {
        service
    }
}

/// Pick the acting user's email: explicit flag first, then settings
pub fn resolve_viewer(explicit: Option<&str>, settings: &Settings) -> BudgetResult<String> {
    explicit
        .or(settings.user_email.as_deref())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            BudgetError::Config(
                "No user email set. Pass --as <email> or run 'budget config --user-email <email>'"
                    .into(),
            )
        })
}
