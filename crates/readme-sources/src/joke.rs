//! Programming joke fetch and rendering.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Opening marker for the joke README section.
pub const JOKE_START: &str = "<!-- JOKE:START -->";
/// Closing marker for the joke README section.
pub const JOKE_END: &str = "<!-- JOKE:END -->";

/// Default JokeAPI endpoint: two-part programming jokes with unsafe
/// categories filtered out.
pub const JOKE_API_URL: &str = "https://v2.jokeapi.dev/joke/Programming?blacklistFlags=nsfw,religious,political,racist,sexist,explicit&type=twopart";

const SERVICE: &str = "jokeapi";

/// A two-part joke: setup question and punchline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub delivery: String,
}

/// Raw JokeAPI payload. The API reports failures in-band with
/// `"error": true` alongside a 200 status, so both halves are optional
/// until validated.
#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(default)]
    error: bool,
    setup: Option<String>,
    delivery: Option<String>,
    message: Option<String>,
}

/// Client for the public JokeAPI.
#[derive(Debug, Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    url: String,
}

impl JokeClient {
    pub fn new() -> Self {
        Self::with_url(JOKE_API_URL.to_string())
    }

    /// Creates a client against a non-default endpoint, for tests.
    pub fn with_url(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Fetches one two-part programming joke.
    pub async fn fetch(&self) -> Result<Joke> {
        tracing::debug!(url = %self.url, "fetching joke");

        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: SERVICE,
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let payload: JokePayload = resp.json().await?;
        if payload.error {
            return Err(Error::Api {
                service: SERVICE,
                message: payload
                    .message
                    .unwrap_or_else(|| "unspecified error".to_string()),
            });
        }

        match (payload.setup, payload.delivery) {
            (Some(setup), Some(delivery)) => {
                tracing::info!(%setup, "joke fetched");
                Ok(Joke { setup, delivery })
            }
            _ => Err(Error::Api {
                service: SERVICE,
                message: "response missing setup or delivery".to_string(),
            }),
        }
    }
}

impl Default for JokeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a joke as the Markdown body of the JOKE section.
pub fn render_joke(joke: &Joke) -> String {
    format!("**Q:** {}\n\n**A:** {}", joke.setup, joke.delivery)
}
