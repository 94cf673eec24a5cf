//! Unified diff rendering for dry-run previews.

use similar::TextDiff;

/// Renders a line-oriented unified diff between the current and updated
/// document text.
///
/// Used by callers to preview what a reconciliation would write without
/// touching the file.
pub fn unified_diff(old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header("current", "updated")
        .to_string()
}
