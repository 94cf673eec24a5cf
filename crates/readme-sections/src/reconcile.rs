//! Section lookup and reconciliation.
//!
//! Finds a marker-delimited section in a document with the format:
//! ```text
//! <!-- NAME:START -->
//! body here
//! <!-- NAME:END -->
//! ```
//! and computes the updated document for freshly rendered body content.
//!
//! Marker search is an anchored substring scan: the first occurrence of the
//! start marker, then the nearest following end marker. Regex is
//! deliberately not used here so that first-match/nearest-end semantics do
//! not depend on greedy-vs-lazy engine behavior.

use std::ops::Range;

use crate::marker::MarkerPair;

/// A located section with its byte span, body, and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Byte range of the full section in the document, markers inclusive.
    pub span: Range<usize>,
    /// The content between the markers, stripped of at most one leading and
    /// one trailing newline inserted by convention.
    pub body: String,
    /// The 1-based line number where the opening marker starts.
    pub start_line: usize,
    /// The 1-based line number where the closing marker ends.
    pub end_line: usize,
}

/// What a reconciliation did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// The stored body already matches the rendered content; nothing to do.
    Unchanged,
    /// An existing section was replaced in place.
    Replaced,
    /// No section was found; a new one was appended at the end.
    Appended,
}

/// The outcome of a reconciliation: the (possibly updated) document text
/// and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The full document text after reconciliation.
    pub document: String,
    /// The action taken.
    pub action: ReconcileAction,
}

impl Reconciliation {
    /// Whether the caller needs to write the document back.
    pub fn changed(&self) -> bool {
        self.action != ReconcileAction::Unchanged
    }
}

/// Finds the first section delimited by the given marker pair.
///
/// Anchors to the first occurrence of the start marker and the nearest end
/// marker after it. Returns `None` when either marker is missing or the end
/// marker only appears before the start marker.
///
/// # Example
/// ```
/// use readme_sections::{MarkerPair, find_section};
///
/// let markers = MarkerPair::new("<!-- A:START -->", "<!-- A:END -->").unwrap();
/// let document = "intro\n<!-- A:START -->\nbody\n<!-- A:END -->\noutro";
///
/// let section = find_section(document, &markers).unwrap();
/// assert_eq!(section.body, "body");
/// assert_eq!(section.start_line, 2);
/// assert_eq!(section.end_line, 4);
/// ```
pub fn find_section(document: &str, markers: &MarkerPair) -> Option<Section> {
    let open_start = document.find(markers.start())?;
    let open_end = open_start + markers.start().len();

    let close_rel = document[open_end..].find(markers.end())?;
    let close_start = open_end + close_rel;
    let close_end = close_start + markers.end().len();

    // Strip the single newline on each side that render_section inserts.
    let raw = &document[open_end..close_start];
    let body = raw.strip_prefix('\n').unwrap_or(raw);
    let body = body.strip_suffix('\n').unwrap_or(body);

    let start_line = document[..open_start].lines().count() + 1;
    let end_line = document[..close_end].lines().count();

    Some(Section {
        span: open_start..close_end,
        body: body.to_string(),
        start_line,
        end_line,
    })
}

/// Reconciles a document against freshly rendered section content.
///
/// If a section exists and its body already equals the rendered content
/// after trimming surrounding whitespace on both sides, the document is
/// returned untouched with `ReconcileAction::Unchanged`. Otherwise the
/// first matched section is replaced in place, or a new section is appended
/// at the end of the document, separated from existing text by a blank
/// line.
///
/// All document text outside the matched section is preserved byte for
/// byte. This never fails: malformed marker state (a lone end marker,
/// markers out of order) simply takes the append branch.
///
/// # Example
/// ```
/// use readme_sections::{MarkerPair, ReconcileAction, reconcile};
///
/// let markers = MarkerPair::new("<!-- A:START -->", "<!-- A:END -->").unwrap();
///
/// let appended = reconcile("# Title\n", &markers, "hello");
/// assert_eq!(appended.action, ReconcileAction::Appended);
///
/// let unchanged = reconcile(&appended.document, &markers, "hello");
/// assert_eq!(unchanged.action, ReconcileAction::Unchanged);
/// assert!(!unchanged.changed());
/// ```
pub fn reconcile(document: &str, markers: &MarkerPair, rendered: &str) -> Reconciliation {
    match find_section(document, markers) {
        Some(section) => {
            if section.body.trim() == rendered.trim() {
                tracing::debug!(
                    start_line = section.start_line,
                    "section body unchanged, skipping"
                );
                return Reconciliation {
                    document: document.to_string(),
                    action: ReconcileAction::Unchanged,
                };
            }

            tracing::debug!(
                start_line = section.start_line,
                end_line = section.end_line,
                "replacing section in place"
            );

            let replacement = markers.render_section(rendered);
            let mut updated =
                String::with_capacity(document.len() - section.span.len() + replacement.len());
            updated.push_str(&document[..section.span.start]);
            updated.push_str(&replacement);
            updated.push_str(&document[section.span.end..]);

            Reconciliation {
                document: updated,
                action: ReconcileAction::Replaced,
            }
        }
        None => {
            tracing::debug!("no section found, appending at end of document");

            let section = markers.render_section(rendered);
            let document = if document.is_empty() {
                section
            } else if document.ends_with('\n') {
                format!("{document}\n{section}")
            } else {
                format!("{document}\n\n{section}")
            };

            Reconciliation {
                document,
                action: ReconcileAction::Appended,
            }
        }
    }
}
