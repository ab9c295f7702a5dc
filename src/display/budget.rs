//! Budget display formatting
//!
//! Formats budget records for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BudgetRecord;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Budget")]
    set_amount: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Left")]
    left: String,
    #[tabled(rename = "Owner")]
    owner: String,
}

/// Format a list of budgets as a table
pub fn format_budget_list(budgets: &[BudgetRecord], currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n\nRun 'budget create <name> <amount>' to add one.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        name: b.name.clone(),
        set_amount: b.set_amount.format_with_symbol(currency_symbol),
        spent: b.spent.format_with_symbol(currency_symbol),
        left: b.left.format_with_symbol(currency_symbol),
        owner: b.created_by.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single budget's details
pub fn format_budget_details(budget: &BudgetRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:      {}\n", budget.id.as_uuid()));
    output.push_str(&format!("  Owner:   {}\n", budget.created_by));
    output.push_str(&format!(
        "  Budget:  {}\n",
        budget.set_amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Spent:   {}\n",
        budget.spent.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Left:    {}\n",
        budget.left.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Shared:  {}\n",
        if budget.is_shared { "yes" } else { "no" }
    ));

    if budget.has_history() {
        output.push_str("  History:\n");
        for entry in budget.history.iter().filter(|e| !e.is_sentinel()) {
            output.push_str(&format!("    {}\n", entry));
        }
    } else {
        output.push_str("  History: (none)\n");
    }

    output
}
