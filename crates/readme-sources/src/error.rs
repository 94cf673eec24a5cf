//! Error types for readme-sources

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fetching or decoding upstream data.
///
/// Every variant is fatal for the current run: when a producer fails, no
/// document write happens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status} for {url}")]
    Status {
        service: &'static str,
        status: u16,
        url: String,
    },

    #[error("{service} rejected the request: {message}")]
    Api {
        service: &'static str,
        message: String,
    },
}
