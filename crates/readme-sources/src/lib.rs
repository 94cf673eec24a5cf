//! Upstream content producers for README Manager.
//!
//! Each producer fetches remote data and renders it as a Markdown body
//! string for one managed README section. The reconciliation core treats
//! producers as opaque string sources; this crate owns the HTTP clients,
//! the typed response records, and the rendering rules.
//!
//! Producers never hand an empty body to the reconciler: when there is
//! nothing to render they supply a placeholder line instead, since an empty
//! body is syntactically valid but would erase the section content.

pub mod endorsements;
pub mod error;
pub mod github;
pub mod joke;

pub use endorsements::{
    ENDORSEMENTS_END, ENDORSEMENTS_START, Endorsement, collect_endorsements, render_endorsements,
};
pub use error::{Error, Result};
pub use github::{Comment, GithubClient, Issue, Reaction, User};
pub use joke::{JOKE_END, JOKE_START, Joke, JokeClient, render_joke};
