//! Sharing CLI commands
//!
//! Show, add to and remove from a budget's shared-with list.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_shared_list;
use crate::error::BudgetResult;
use crate::services::{ShareOutcome, ShareSession};
use crate::storage::Storage;

use super::service_for;

/// Share subcommands
#[derive(Subcommand)]
pub enum ShareCommands {
    /// Show who a budget is shared with
    List {
        /// Budget ID
        id: String,
    },

    /// Share a budget with an email address
    Add {
        /// Budget ID
        id: String,
        /// Email address to share with
        email: String,
    },

    /// Stop sharing a budget with an email address
    #[command(alias = "rm")]
    Remove {
        /// Budget ID
        id: String,
        /// Email address to remove
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a share command
pub fn handle_share_command(
    storage: &Storage,
    settings: &Settings,
    viewer: &str,
    cmd: ShareCommands,
) -> BudgetResult<()> {
    let service = service_for(storage, settings);

    match cmd {
        ShareCommands::List { id } => {
            let record = storage.budgets.find(&id)?;
            let sharing = service.sharing();
            let view = sharing.visible_entries(&record, viewer);
            print!(
                "{}",
                format_shared_list(&view, sharing.share_label(&record, viewer))
            );
        }

        ShareCommands::Add { id, email } => {
            let record = storage.budgets.find(&id)?;
            let updated = service.share(&record, viewer, &email)?;
            println!("Shared '{}' with {}", updated.name, email.trim());
        }

        ShareCommands::Remove { id, email, yes } => {
            let record = storage.budgets.find(&id)?;
            let mut session = ShareSession::new(viewer);

            let prompt = session.begin_remove(&record, &email)?;
            if !yes {
                println!("{}", prompt);
                session.cancel();
                println!("Cancelled. Pass --yes to remove.");
                return Ok(());
            }

            match session.confirm(&record)? {
                ShareOutcome::Removed { email, record: updated } => {
                    service.commit_removal(&record, &updated, viewer)?;
                    println!("Removed {} from '{}'", email, updated.name);
                }
                ShareOutcome::Cancelled => println!("Cancelled."),
            }
        }
    }

    Ok(())
}
