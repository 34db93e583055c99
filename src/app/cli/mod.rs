//! CLI Adapter.

mod history;
mod wizard;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::{api, logging};
use crate::domain::{AppConfig, AppError, OTHER_KEY};

#[derive(Parser)]
#[command(name = "devprompt")]
#[command(version)]
#[command(
    about = "Compose structured AI coding prompts from a guided questionnaire",
    long_about = None
)]
struct Cli {
    /// Config file (default: $DEVPROMPT_CONFIG or ~/.config/devprompt/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire interactively
    #[clap(visible_alias = "w")]
    Wizard {
        /// Preload answers from a JSON, TOML or YAML file
        #[arg(short, long, value_name = "FILE")]
        answers: Option<PathBuf>,
    },
    /// Compose the prompt from an answers file
    #[clap(visible_alias = "c")]
    Compose {
        /// Answers file, or `-` for JSON on stdin
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        answers: String,
        /// Write the prompt to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,
        /// Save the prompt to history (requires an identity)
        #[arg(long)]
        save: bool,
    },
    /// Show which questionnaire steps are complete
    #[clap(visible_alias = "p")]
    Progress {
        /// Answers file, or `-` for JSON on stdin
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        answers: String,
    },
    /// List catalog options
    Catalog {
        /// List the specific features of this system type
        #[arg(short = 't', long, value_name = "KEY")]
        system_type: Option<String>,
    },
    /// Manage saved prompts
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
    /// Compose and rewrite the prompt through the configured AI endpoint
    #[clap(visible_alias = "e")]
    Enhance {
        /// Answers file, or `-` for JSON on stdin
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        answers: String,
        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = api::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Wizard { answers } => wizard::run_wizard(&config, answers.as_deref()),
        Commands::Compose { answers, output, copy, save } => {
            run_compose(&config, &answers, output.as_deref(), copy, save)
        }
        Commands::Progress { answers } => run_progress(&config, &answers),
        Commands::Catalog { system_type } => run_catalog(&config, system_type.as_deref()),
        Commands::History { command } => history::run_history(&config, command),
        Commands::Enhance { answers, output } => run_enhance(&config, &answers, output.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_compose(
    config: &AppConfig,
    answers: &str,
    output: Option<&Path>,
    copy: bool,
    save: bool,
) -> Result<(), AppError> {
    let answers = api::load_answers(answers)?;
    if save && api::create_context(config)?.identity().is_none() {
        return Err(AppError::IdentityMissing);
    }
    let outcome = api::compose(config, &answers)?;

    if let Some(path) = output {
        let path = api::export(&outcome.document, Some(path))?;
        println!("✅ Saved prompt to {}", path.display());
    }
    if copy {
        let copied = api::copy_to_clipboard(config, &outcome.document)?;
        println!("✅ Copied prompt to clipboard");
        if let Some(entry) = copied.saved {
            println!("  Saved to history as {}", entry.id);
        }
    }
    if save && !copy {
        let entry = api::history_save(config, &outcome.document)?;
        println!("✅ Saved to history as {}", entry.id);
    }
    if output.is_none() && !copy && !save {
        print!("{}", outcome.document);
    }
    Ok(())
}

fn run_progress(config: &AppConfig, answers: &str) -> Result<(), AppError> {
    let answers = api::load_answers(answers)?;
    let completion = api::progress(config, &answers)?;
    print!("{}", api::format_progress(&completion));
    Ok(())
}

fn run_catalog(config: &AppConfig, system_type: Option<&str>) -> Result<(), AppError> {
    let catalog = api::catalog(config)?;

    let Some(system_type) = system_type else {
        for key in &catalog.system_types {
            if key == OTHER_KEY {
                println!("{} (custom)", key);
            } else {
                println!("{}", key);
            }
        }
        return Ok(());
    };

    if !catalog.system_types.iter().any(|key| key == system_type) {
        return Err(AppError::CatalogError(format!("Unknown system type '{}'", system_type)));
    }
    for feature in catalog.specific_features_for(system_type) {
        println!("{}", feature);
    }
    Ok(())
}

fn run_enhance(config: &AppConfig, answers: &str, output: Option<&Path>) -> Result<(), AppError> {
    let answers = api::load_answers(answers)?;
    let outcome = api::compose(config, &answers)?;
    let enhanced = api::enhance(config, &outcome.document, answers.resolved_system_type())?;

    if let Some(reason) = &enhanced.fallback_reason {
        eprintln!("⚠️  Enhancement unavailable ({}); using the original prompt", reason);
    }
    match output {
        Some(path) => {
            let path = api::export(&enhanced.text, Some(path))?;
            println!("✅ Saved prompt to {}", path.display());
        }
        None => print!("{}", enhanced.text),
    }
    Ok(())
}
