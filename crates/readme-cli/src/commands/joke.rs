//! Joke command implementation.

use std::path::Path;

use colored::Colorize;

use readme_sections::MarkerPair;
use readme_sources::{JOKE_END, JOKE_START, JokeClient, render_joke};

use crate::error::Result;

/// Runs the joke update: fetch one two-part programming joke and reconcile
/// it into the document.
pub async fn run_joke(file: &Path, dry_run: bool, api_url: Option<String>) -> Result<()> {
    let client = match api_url {
        Some(url) => JokeClient::with_url(url),
        None => JokeClient::new(),
    };

    println!(
        "{} Fetching a fresh programming joke...",
        "=>".blue().bold()
    );

    let joke = client.fetch().await?;
    let rendered = render_joke(&joke);

    let markers = MarkerPair::new(JOKE_START, JOKE_END)?;
    super::apply_section(file, &markers, &rendered, dry_run)
}
