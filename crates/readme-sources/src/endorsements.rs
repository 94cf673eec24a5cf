//! Endorsement collection and Markdown rendering.
//!
//! Endorsements are open issues whose title starts with `"Endorse: "`.
//! Everyone who touched such an issue counts as an endorser: the issue
//! creator, every commenter, and every reactor, in that order, deduplicated
//! by login.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::github::{GithubClient, User};

/// Opening marker for the endorsements README section.
pub const ENDORSEMENTS_START: &str = "<!-- ENDORSEMENTS:START -->";
/// Closing marker for the endorsements README section.
pub const ENDORSEMENTS_END: &str = "<!-- ENDORSEMENTS:END -->";

/// Issue title prefix that marks an endorsement issue.
pub const ENDORSE_PREFIX: &str = "Endorse: ";

/// Line rendered when no endorsement issues exist, so the section body is
/// never empty.
pub const EMPTY_PLACEHOLDER: &str = "- No endorsements yet. Be the first to endorse!";

const PLACEHOLDER_LOGIN: &str = "placeholder";
const PLACEHOLDER_AVATAR: &str = "https://github.com/identicons/placeholder.png";

static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style[^>]*>.*</style>").expect("Invalid style tag regex")
});
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script[^>]*>.*</script>").expect("Invalid script tag regex")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid html tag regex"));
static INDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\r\n]+ +)+").expect("Invalid indent run regex"));
static AVATAR_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&s=\d+").expect("Invalid avatar size regex"));

/// One endorsement issue with its deduplicated endorsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endorsement {
    /// Issue title with the `"Endorse: "` prefix stripped and trimmed.
    pub title: String,
    /// The issue's web URL.
    pub url: String,
    /// The issue number.
    pub number: u64,
    /// Endorsers in insertion order: creator, commenters, reactors.
    pub endorsers: Vec<User>,
}

/// Collects endorsement issues and their endorsers from a repository.
///
/// Issues without a single usable endorser (no user record, or an empty
/// avatar URL) get a placeholder entry so the rendered list never shows an
/// empty endorser row.
pub async fn collect_endorsements(
    client: &GithubClient,
    owner: &str,
    repo: &str,
) -> Result<Vec<Endorsement>> {
    let issues = client.open_issues(owner, repo).await?;
    let mut result = Vec::new();

    for issue in issues {
        let Some(title) = issue.title.strip_prefix(ENDORSE_PREFIX) else {
            continue;
        };
        let title = title.trim().to_string();
        tracing::info!(number = issue.number, title = %title, "found endorsement issue");

        let mut seen = HashSet::new();
        let mut endorsers = Vec::new();

        add_endorser(&mut seen, &mut endorsers, issue.user);
        for comment in client.issue_comments(owner, repo, issue.number).await? {
            add_endorser(&mut seen, &mut endorsers, comment.user);
        }
        for reaction in client.issue_reactions(owner, repo, issue.number).await? {
            add_endorser(&mut seen, &mut endorsers, reaction.user);
        }

        if endorsers.is_empty() {
            tracing::warn!(number = issue.number, "issue has no endorsers with avatars");
            endorsers.push(User {
                login: PLACEHOLDER_LOGIN.to_string(),
                avatar_url: PLACEHOLDER_AVATAR.to_string(),
            });
        }

        result.push(Endorsement {
            title,
            url: issue.html_url,
            number: issue.number,
            endorsers,
        });
    }

    tracing::info!(count = result.len(), "collected endorsement issues");
    Ok(result)
}

fn add_endorser(seen: &mut HashSet<String>, endorsers: &mut Vec<User>, user: Option<User>) {
    let Some(user) = user else { return };
    if user.avatar_url.is_empty() {
        return;
    }
    if seen.insert(user.login.clone()) {
        endorsers.push(user);
    }
}

/// Renders the endorsements list as the Markdown body of the
/// ENDORSEMENTS section.
pub fn render_endorsements(endorsements: &[Endorsement]) -> String {
    if endorsements.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    endorsements
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_item(endorsement: &Endorsement) -> String {
    let title = sanitize_title(&endorsement.title);

    let avatars: String = endorsement
        .endorsers
        .iter()
        .map(|user| {
            format!(
                "![{}]({} \"{}\") ",
                user.login,
                sized_avatar_url(&user.avatar_url),
                user.login
            )
        })
        .collect();

    format!("- [{}]({}): {}", title, endorsement.url, avatars)
}

/// Strips embedded HTML from an issue title while preserving plain text and
/// emojis.
fn sanitize_title(title: &str) -> String {
    let cleaned = STYLE_RE.replace_all(title, "");
    let cleaned = SCRIPT_RE.replace_all(&cleaned, "");
    let cleaned = TAG_RE.replace_all(&cleaned, "");
    INDENT_RE.replace_all(&cleaned, "").to_string()
}

/// Normalizes an avatar URL to a consistent 20px display size, replacing
/// any size parameter already present.
fn sized_avatar_url(url: &str) -> String {
    let stripped = AVATAR_SIZE_RE.replace_all(url, "");
    format!("{stripped}&s=20")
}
