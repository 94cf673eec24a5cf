//! End-to-end integration tests for the full update pipeline
//!
//! These tests exercise the complete flow: fetch upstream data from mock
//! servers -> render Markdown -> reconcile into a document -> write it back
//! through the atomic file layer.

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use readme_sections::{MarkerPair, ReconcileAction, find_section, reconcile};
use readme_sources::{
    ENDORSEMENTS_END, ENDORSEMENTS_START, GithubClient, JOKE_END, JOKE_START, JokeClient,
    collect_endorsements, render_endorsements, render_joke,
};

fn endorsement_markers() -> MarkerPair {
    MarkerPair::new(ENDORSEMENTS_START, ENDORSEMENTS_END).unwrap()
}

fn joke_markers() -> MarkerPair {
    MarkerPair::new(JOKE_START, JOKE_END).unwrap()
}

/// Mounts a single endorsement issue with one commenter and one reactor.
fn mock_github(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues");
        then.status(200).json_body(json!([{
            "number": 7,
            "title": "Endorse: Great mentor",
            "html_url": "https://github.com/acme/site/issues/7",
            "user": {"login": "alice", "avatar_url": "https://a.test/alice?v=4"}
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues/7/comments");
        then.status(200).json_body(json!([
            {"user": {"login": "bob", "avatar_url": "https://a.test/bob?v=4"}}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues/7/reactions");
        then.status(200).json_body(json!([
            {"user": {"login": "carol", "avatar_url": "https://a.test/carol?v=4"}}
        ]));
    });
}

#[tokio::test]
async fn test_endorsements_pipeline_appends_and_stabilizes() {
    let server = MockServer::start();
    mock_github(&server);

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    readme_fs::write_text(&path, "# Project\n\nIntro text.\n").unwrap();

    let client = GithubClient::with_base_url("test-token".to_string(), server.base_url());

    // First run appends the section.
    let endorsements = collect_endorsements(&client, "acme", "site").await.unwrap();
    let rendered = render_endorsements(&endorsements);
    let document = readme_fs::read_text(&path).unwrap();
    let outcome = reconcile(&document, &endorsement_markers(), &rendered);
    assert_eq!(outcome.action, ReconcileAction::Appended);
    readme_fs::write_text(&path, &outcome.document).unwrap();

    let written = readme_fs::read_text(&path).unwrap();
    assert!(written.starts_with("# Project\n\nIntro text.\n"));
    let section = find_section(&written, &endorsement_markers()).unwrap();
    assert!(section.body.contains("[Great mentor](https://github.com/acme/site/issues/7)"));
    for login in ["alice", "bob", "carol"] {
        assert!(section.body.contains(&format!("![{login}]")));
    }

    // Second run with identical upstream data is a no-op.
    let endorsements = collect_endorsements(&client, "acme", "site").await.unwrap();
    let rendered = render_endorsements(&endorsements);
    let outcome = reconcile(&written, &endorsement_markers(), &rendered);
    assert_eq!(outcome.action, ReconcileAction::Unchanged);
    assert_eq!(outcome.document, written);
}

#[tokio::test]
async fn test_endorsements_pipeline_replaces_on_new_data() {
    let first_server = MockServer::start();
    mock_github(&first_server);

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    readme_fs::write_text(&path, "# Project\n").unwrap();

    let client = GithubClient::with_base_url("t".to_string(), first_server.base_url());
    let endorsements = collect_endorsements(&client, "acme", "site").await.unwrap();
    let rendered = render_endorsements(&endorsements);
    let document = readme_fs::read_text(&path).unwrap();
    readme_fs::write_text(
        &path,
        &reconcile(&document, &endorsement_markers(), &rendered).document,
    )
    .unwrap();

    // Upstream gains a second issue; the section is replaced in place.
    let second_server = MockServer::start();
    second_server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues");
        then.status(200).json_body(json!([
            {
                "number": 7,
                "title": "Endorse: Great mentor",
                "html_url": "https://github.com/acme/site/issues/7",
                "user": {"login": "alice", "avatar_url": "https://a.test/alice?v=4"}
            },
            {
                "number": 9,
                "title": "Endorse: Rust wizard",
                "html_url": "https://github.com/acme/site/issues/9",
                "user": {"login": "dave", "avatar_url": "https://a.test/dave?v=4"}
            }
        ]));
    });
    for issue in [7, 9] {
        second_server.mock(move |when, then| {
            when.method(GET)
                .path(format!("/repos/acme/site/issues/{issue}/comments"));
            then.status(200).json_body(json!([]));
        });
        second_server.mock(move |when, then| {
            when.method(GET)
                .path(format!("/repos/acme/site/issues/{issue}/reactions"));
            then.status(200).json_body(json!([]));
        });
    }

    let client = GithubClient::with_base_url("t".to_string(), second_server.base_url());
    let endorsements = collect_endorsements(&client, "acme", "site").await.unwrap();
    let rendered = render_endorsements(&endorsements);
    let document = readme_fs::read_text(&path).unwrap();
    let outcome = reconcile(&document, &endorsement_markers(), &rendered);
    assert_eq!(outcome.action, ReconcileAction::Replaced);
    readme_fs::write_text(&path, &outcome.document).unwrap();

    let written = readme_fs::read_text(&path).unwrap();
    assert!(written.starts_with("# Project\n"));
    let section = find_section(&written, &endorsement_markers()).unwrap();
    assert!(section.body.contains("Great mentor"));
    assert!(section.body.contains("Rust wizard"));
    assert_eq!(written.matches(ENDORSEMENTS_START).count(), 1);
}

#[tokio::test]
async fn test_endorsements_pipeline_renders_placeholder_without_issues() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues");
        then.status(200).json_body(json!([]));
    });

    let client = GithubClient::with_base_url("t".to_string(), server.base_url());
    let endorsements = collect_endorsements(&client, "acme", "site").await.unwrap();
    let rendered = render_endorsements(&endorsements);

    let outcome = reconcile("# Project\n", &endorsement_markers(), &rendered);
    assert_eq!(outcome.action, ReconcileAction::Appended);
    let section = find_section(&outcome.document, &endorsement_markers()).unwrap();
    assert_eq!(section.body, "- No endorsements yet. Be the first to endorse!");
}

#[tokio::test]
async fn test_joke_and_endorsements_share_one_document() {
    let github = MockServer::start();
    mock_github(&github);
    let jokes = MockServer::start();
    jokes.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(200).json_body(json!({
            "error": false,
            "type": "twopart",
            "setup": "Why do programmers prefer dark mode?",
            "delivery": "Because light attracts bugs."
        }));
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    readme_fs::write_text(&path, "# Project\n").unwrap();

    // Joke first.
    let joke_client = JokeClient::with_url(format!("{}/joke/Programming", jokes.base_url()));
    let joke = joke_client.fetch().await.unwrap();
    let document = readme_fs::read_text(&path).unwrap();
    let outcome = reconcile(&document, &joke_markers(), &render_joke(&joke));
    readme_fs::write_text(&path, &outcome.document).unwrap();

    // Then endorsements.
    let github_client = GithubClient::with_base_url("t".to_string(), github.base_url());
    let endorsements = collect_endorsements(&github_client, "acme", "site")
        .await
        .unwrap();
    let document = readme_fs::read_text(&path).unwrap();
    let outcome = reconcile(
        &document,
        &endorsement_markers(),
        &render_endorsements(&endorsements),
    );
    readme_fs::write_text(&path, &outcome.document).unwrap();

    let written = readme_fs::read_text(&path).unwrap();
    let joke_section = find_section(&written, &joke_markers()).unwrap();
    let endorse_section = find_section(&written, &endorsement_markers()).unwrap();
    assert_eq!(
        joke_section.body,
        "**Q:** Why do programmers prefer dark mode?\n\n**A:** Because light attracts bugs."
    );
    assert!(endorse_section.body.contains("Great mentor"));

    // Refreshing the joke leaves the endorsements section untouched.
    let joke = joke_client.fetch().await.unwrap();
    let outcome = reconcile(&written, &joke_markers(), &render_joke(&joke));
    assert_eq!(outcome.action, ReconcileAction::Unchanged);
}

#[tokio::test]
async fn test_failed_fetch_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/site/issues");
        then.status(500);
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    readme_fs::write_text(&path, "# Project\n").unwrap();

    let client = GithubClient::with_base_url("t".to_string(), server.base_url());
    let result = collect_endorsements(&client, "acme", "site").await;
    assert!(result.is_err());

    // The update is abandoned before any reconcile/write step.
    assert_eq!(readme_fs::read_text(&path).unwrap(), "# Project\n");
}
