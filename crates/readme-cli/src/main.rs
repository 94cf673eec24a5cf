//! README Manager CLI
//!
//! The command-line interface for keeping managed README sections current.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Endorsements { dry_run, api_url }) => {
            runtime()?.block_on(commands::run_endorsements(&cli.file, dry_run, api_url))
        }
        Some(Commands::Joke { dry_run, api_url }) => {
            runtime()?.block_on(commands::run_joke(&cli.file, dry_run, api_url))
        }
        Some(Commands::Completions { shell }) => {
            commands::run_completions(shell);
            Ok(())
        }
        None => {
            // No command provided - show help hint
            println!("{} README Manager CLI", "readme".green().bold());
            println!();
            println!("Run {} for available commands.", "readme --help".cyan());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
