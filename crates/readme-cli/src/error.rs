//! Error types for readme-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from readme-sections
    #[error(transparent)]
    Sections(#[from] readme_sections::Error),

    /// Error from readme-sources
    #[error(transparent)]
    Sources(#[from] readme_sources::Error),

    /// Error from readme-fs
    #[error(transparent)]
    Fs(#[from] readme_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Required environment configuration is absent
    #[error("Missing required environment variables: {}", vars.join(", "))]
    MissingEnv { vars: Vec<&'static str> },
}
