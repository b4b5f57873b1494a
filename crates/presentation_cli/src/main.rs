//! Trivesha CLI
//!
//! Command-line access to the Trivesha backend for administration and testing.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod config;
mod navigator;
mod payload;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use api_client::{ApiClient, FileSessionStore};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{
    AdminCommand, AuthCommand, ContactCommand, ContentCommand, PortfolioCommand, PricingCommand,
    UploadCommand,
};
use crate::config::CliConfig;
use crate::navigator::TerminalNavigator;

/// Trivesha CLI
#[derive(Debug, Parser)]
#[command(name = "trivesha-cli")]
#[command(author, version, about = "Trivesha agency backend CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Configuration file (default: ./trivesha.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:5000/api
    #[arg(long, env = "TRIVESHA_API_URL", global = true)]
    api_url: Option<String>,

    /// Session file holding the token and user record
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register, log in and out, manage the profile
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Pricing plans
    #[command(subcommand)]
    Pricing(PricingCommand),

    /// Users and dashboard statistics
    #[command(subcommand)]
    Admin(AdminCommand),

    /// Portfolio projects
    #[command(subcommand)]
    Portfolio(PortfolioCommand),

    /// CMS sections
    #[command(subcommand)]
    Content(ContentCommand),

    /// Image uploads
    #[command(subcommand)]
    Upload(UploadCommand),

    /// Contact form and inbox
    #[command(subcommand)]
    Contact(ContactCommand),
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, json: bool) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn build_client(config: &CliConfig) -> anyhow::Result<ApiClient> {
    let store = FileSessionStore::open(&config.session.file).with_context(|| {
        format!(
            "Failed to open session file {}",
            config.session.file.display()
        )
    })?;

    let client = ApiClient::new(
        config.api.clone(),
        Arc::new(store),
        Arc::new(TerminalNavigator),
    )?;
    Ok(client)
}

fn print_result(value: &serde_json::Value) -> anyhow::Result<()> {
    if value.is_null() {
        println!("✅ Done");
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.api_url, cli.session_file);

    init_logging(cli.verbose, cli.log_json || config.log.json);

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    debug!(base_url = %config.api.base_url, session = %config.session.file.display(), "Configuration loaded");

    let client = build_client(&config)?;

    let result = match cli.command {
        Commands::Auth(command) => command.run(&client).await,
        Commands::Pricing(command) => command.run(&client).await,
        Commands::Admin(command) => command.run(&client).await,
        Commands::Portfolio(command) => command.run(&client).await,
        Commands::Content(command) => command.run(&client).await,
        Commands::Upload(command) => command.run(&client).await,
        Commands::Contact(command) => command.run(&client).await,
    }?;

    print_result(&result)
}
