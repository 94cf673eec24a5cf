//! Endorsements command implementation.

use std::path::Path;

use colored::Colorize;

use readme_sections::MarkerPair;
use readme_sources::{
    ENDORSEMENTS_END, ENDORSEMENTS_START, GithubClient, collect_endorsements,
    render_endorsements,
};

use crate::config::EndorsementsConfig;
use crate::error::Result;

/// Runs the endorsements update against the repository configured in the
/// environment.
pub async fn run_endorsements(file: &Path, dry_run: bool, api_url: Option<String>) -> Result<()> {
    let config = EndorsementsConfig::from_env()?;
    let client = match api_url {
        Some(url) => GithubClient::with_base_url(config.token, url),
        None => GithubClient::new(config.token),
    };

    println!(
        "{} Collecting endorsements for {}/{}...",
        "=>".blue().bold(),
        config.owner,
        config.repo
    );

    let endorsements = collect_endorsements(&client, &config.owner, &config.repo).await?;
    let rendered = render_endorsements(&endorsements);

    let markers = MarkerPair::new(ENDORSEMENTS_START, ENDORSEMENTS_END)?;
    super::apply_section(file, &markers, &rendered, dry_run)
}
