//! Command implementations for the readme binary.
//!
//! Both updater commands share the same tail: read the document, reconcile
//! the freshly rendered section body into it, then report, preview, or
//! write depending on the outcome and the dry-run flag.

mod endorsements;
mod joke;

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;

use readme_sections::{MarkerPair, ReconcileAction, reconcile, unified_diff};

use crate::cli::Cli;
use crate::error::Result;

pub use endorsements::run_endorsements;
pub use joke::run_joke;

/// Generates a shell completion script on stdout.
pub fn run_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

fn apply_section(file: &Path, markers: &MarkerPair, rendered: &str, dry_run: bool) -> Result<()> {
    let document = readme_fs::read_text(file)?;
    let outcome = reconcile(&document, markers, rendered);

    match outcome.action {
        ReconcileAction::Unchanged => {
            println!(
                "{} {} is already up to date. No changes needed.",
                "OK".green().bold(),
                file.display()
            );
        }
        _ if dry_run => {
            println!("{} Would update {}:", "=>".blue().bold(), file.display());
            print!("{}", unified_diff(&document, &outcome.document));
        }
        ReconcileAction::Replaced => {
            readme_fs::write_text(file, &outcome.document)?;
            println!(
                "{} Replaced section content in {}.",
                "OK".green().bold(),
                file.display()
            );
        }
        ReconcileAction::Appended => {
            readme_fs::write_text(file, &outcome.document)?;
            println!(
                "{} Appended new section to {}.",
                "OK".green().bold(),
                file.display()
            );
        }
    }

    Ok(())
}
