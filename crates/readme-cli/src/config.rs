//! Environment-derived configuration for the endorsements command.

use crate::error::{CliError, Result};

/// Environment variable holding the GitHub API token.
pub const ENV_GITHUB_TOKEN: &str = "ENV_GITHUB_TOKEN";
/// Environment variable holding the repository owner.
pub const CI_REPOSITORY_OWNER: &str = "CI_REPOSITORY_OWNER";
/// Environment variable holding the repository name.
pub const CI_REPOSITORY_NAME: &str = "CI_REPOSITORY_NAME";

/// Repository coordinates and credentials for the endorsements update.
#[derive(Debug, Clone)]
pub struct EndorsementsConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
}

impl EndorsementsConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Every absent or empty variable is collected before failing, so one
    /// run reports the complete list instead of the first hit.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(name);
                None
            }
        };

        let token = read(ENV_GITHUB_TOKEN);
        let owner = read(CI_REPOSITORY_OWNER);
        let repo = read(CI_REPOSITORY_NAME);

        match (token, owner, repo) {
            (Some(token), Some(owner), Some(repo)) => Ok(Self { token, owner, repo }),
            _ => {
                tracing::error!(?missing, "required environment variables are not set");
                Err(CliError::MissingEnv { vars: missing })
            }
        }
    }
}
