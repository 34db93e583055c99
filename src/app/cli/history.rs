use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppConfig, AppError};

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved prompts, newest first
    #[clap(visible_alias = "ls")]
    List,
    /// Print a saved prompt
    Show {
        /// Entry id (a unique prefix is enough)
        id: String,
    },
    /// Delete a saved prompt
    #[clap(visible_alias = "rm")]
    Delete {
        /// Entry id (a unique prefix is enough)
        id: String,
    },
}

pub fn run_history(config: &AppConfig, command: HistoryCommands) -> Result<(), AppError> {
    match command {
        HistoryCommands::List => {
            let entries = api::history_list(config)?;
            if entries.is_empty() {
                println!("No saved prompts");
            }
            for entry in entries {
                println!(
                    "{}  {}  {}",
                    entry.id,
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    entry.derived_label
                );
            }
        }
        HistoryCommands::Show { id } => {
            let entry = api::history_show(config, &id)?;
            print!("{}", entry.generated_text);
        }
        HistoryCommands::Delete { id } => {
            let entry = api::history_delete(config, &id)?;
            println!("✅ Deleted {} ({})", entry.id, entry.derived_label);
        }
    }
    Ok(())
}
