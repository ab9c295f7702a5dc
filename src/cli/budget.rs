//! Budget CLI commands
//!
//! Create, list, show, edit and reset budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_budget_list};
use crate::error::BudgetResult;
use crate::models::BudgetRecord;
use crate::services::{BudgetEditor, BudgetService};
use crate::storage::{PersistenceGateway, Storage};

use super::service_for;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a new budget owned by the current user
    Create {
        /// Budget name
        name: String,
        /// Budget amount (e.g., "150" or "150.00")
        amount: String,
    },

    /// List budgets visible to the current user
    List {
        /// Include budgets not shared with the current user
        #[arg(short, long)]
        all: bool,
    },

    /// Show a budget's details
    Show {
        /// Budget ID (full UUID or bud-xxxxxxxx)
        id: String,
    },

    /// Change a budget's name and/or amount
    Edit {
        /// Budget ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Clear spending and purchase history
    Reset {
        /// Budget ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    viewer: &str,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Create { name, amount } => {
            let editor = BudgetEditor::new();
            let amount = editor.validate_input(&name, &amount)?;
            let record = BudgetRecord::new(name.trim(), viewer, amount);

            storage.budgets.write_full(record.id, &record)?;

            println!("Created budget: {} ({})", record.name, record.id);
        }

        BudgetCommands::List { all } => {
            let budgets = if all {
                storage.budgets.list()?
            } else {
                storage.budgets.visible_to(viewer)?
            };
            println!("{}", format_budget_list(&budgets, currency));
        }

        BudgetCommands::Show { id } => {
            let record = storage.budgets.find(&id)?;
            print!("{}", format_budget_details(&record, currency));
        }

        BudgetCommands::Edit { id, name, amount } => {
            let record = storage.budgets.find(&id)?;
            let service = service_for(storage, settings);

            let name = name.unwrap_or_else(|| record.name.clone());
            let amount = amount.unwrap_or_else(|| {
                service.editor().format_amount_for_entry(record.set_amount)
            });

            let updated = service.save_edit(&record, viewer, &name, &amount)?;
            println!("Updated budget: {}", updated.name);
            println!(
                "  Budget: {}  Left: {}",
                updated.set_amount.format_with_symbol(currency),
                updated.left.format_with_symbol(currency)
            );
        }

        BudgetCommands::Reset { id, yes } => {
            let record = storage.budgets.find(&id)?;
            let service = service_for(storage, settings);
            reset(&service, &record, viewer, yes)?;
        }
    }

    Ok(())
}

fn reset<G: PersistenceGateway>(
    service: &BudgetService<'_, G>,
    record: &BudgetRecord,
    viewer: &str,
    confirmed: bool,
) -> BudgetResult<()> {
    if !confirmed && service.editor().can_reset(record, viewer) {
        println!("{}", service.editor().reset_prompt(record));
        println!("Cancelled. Pass --yes to reset.");
        return Ok(());
    }

    let updated = service.reset(record, viewer)?;
    println!("Reset budget: {} ({} left)", updated.name, updated.left);
    Ok(())
}
