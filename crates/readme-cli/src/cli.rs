//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// README Manager - Keep managed README sections current
#[derive(Parser, Debug)]
#[command(name = "readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the document to manage
    #[arg(long, global = true, default_value = "README.md")]
    pub file: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Refresh the endorsements section from repository issues
    ///
    /// Collects open issues titled "Endorse: ..." along with everyone who
    /// commented on or reacted to them. Requires ENV_GITHUB_TOKEN,
    /// CI_REPOSITORY_OWNER and CI_REPOSITORY_NAME in the environment.
    Endorsements {
        /// Preview changes without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Override the GitHub API base URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Refresh the joke section with a fresh programming joke
    Joke {
        /// Preview changes without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Override the joke API URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   readme completions bash > ~/.local/share/bash-completion/completions/readme
    ///   readme completions zsh > ~/.zfunc/_readme
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
