use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_share::cli::{
    handle_budget_command, handle_share_command, resolve_viewer, BudgetCommands, ShareCommands,
};
use budget_share::config::{paths::BudgetSharePaths, settings::Settings};
use budget_share::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Edit, reset and share budgets",
    long_about = "Edit a budget's name and amount, reset its spending, and share it \
                  with other people by email."
)]
struct Cli {
    /// Act as this user (email address)
    #[arg(long = "as", global = true, env = "BUDGET_SHARE_USER")]
    as_user: Option<String>,

    /// Use this directory instead of the default data location
    #[arg(long, global = true, env = "BUDGET_SHARE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Budget(BudgetCommands),

    /// Sharing commands
    #[command(subcommand)]
    Share(ShareCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show or update configuration
    Config {
        /// Save this email as the default user
        #[arg(long)]
        user_email: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetSharePaths::with_base_dir(dir),
        None => BudgetSharePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            let viewer = resolve_viewer(cli.as_user.as_deref(), &settings)?;
            handle_budget_command(&storage, &settings, &viewer, cmd)?;
        }
        Some(Commands::Share(cmd)) => {
            let viewer = resolve_viewer(cli.as_user.as_deref(), &settings)?;
            handle_share_command(&storage, &settings, &viewer, cmd)?;
        }
        Some(Commands::Audit { count }) => {
            let entries = storage.audit.read_recent(count)?;
            if entries.is_empty() {
                println!("No changes recorded.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config { user_email }) => {
            if let Some(email) = user_email {
                settings.user_email = Some(email.trim().to_string());
                settings.save(&paths)?;
                println!("Saved default user: {}", email.trim());
            }
            println!("budget-share configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!(
                "User email:     {}",
                settings.user_email.as_deref().unwrap_or("(not set)")
            );
            println!("Currency:       {}", settings.currency_symbol);
            println!("Audit enabled:  {}", settings.audit_enabled);
        }
        None => {
            println!("budget-share - edit and share budgets");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
