use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quote_cli::app::{build_sender, load_catalog, open_store};
use quote_cli::config::AppConfig;
use quote_cli::logging::{enable_file_logging, init_logging, set_console_enabled, set_log_level};
use quote_cli::prompt::DialoguerPrompter;
use quote_cli::render;
use quote_cli::session::{self, Outcome};
use quote_core::{ContactError, ContactForm, WizardController, WizardMode, WizardStep};
use tracing::info;

// ─── CLI definition ──────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "quote-wizard", about = "Request a project quote from the terminal")]
struct Cli {
    /// Config file (default: ./quote.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Hide console logs
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Draft store backend, overriding the config
    #[arg(long, global = true)]
    store: Option<String>,

    /// Draft store location, overriding the config
    #[arg(long, global = true)]
    db: Option<String>,

    /// Step to open on (0-3)
    #[arg(long)]
    step: Option<String>,

    /// Price-first flow: skip the budget question, show a running estimate
    #[arg(long)]
    quote: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a short message without going through the wizard
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();
    if let Some(level) = &cli.log_level {
        set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        enable_file_logging(path)?;
    }
    if cli.quiet {
        set_console_enabled(false)?;
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(backend) = cli.store {
        config.store.backend = backend;
    }
    if let Some(db) = cli.db {
        config.store.connection_string = db;
    }

    let sender = build_sender(&config)?;

    if let Some(Command::Contact {
        name,
        email,
        message,
    }) = cli.command
    {
        return match ContactForm::new(name, email, message).submit(&sender).await {
            Ok(()) => {
                println!("Message sent. Thanks for reaching out!");
                Ok(())
            }
            Err(ContactError::Invalid(errors)) => {
                anyhow::bail!("Please fix the following:\n{}", render::validation_errors(&errors))
            }
            Err(e) => Err(e).context("Failed to send contact message"),
        };
    }

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let store = open_store(&config.store).await?;
    let mode = if cli.quote { WizardMode::Quote } else { WizardMode::Standard };
    let mut wizard = WizardController::restore(
        store,
        catalog,
        WizardStep::from_query(cli.step.as_deref()),
        mode,
    )
    .await;

    let mut prompter = DialoguerPrompter::new();
    let outcome = session::run(&mut wizard, &mut prompter, &sender).await;
    wizard.flush_drafts().await;

    match outcome? {
        Outcome::Submitted => info!("session finished with a submitted inquiry"),
        Outcome::Quit => info!("session left; draft kept"),
    }
    Ok(())
}
