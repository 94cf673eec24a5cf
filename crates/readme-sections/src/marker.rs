//! Marker pair definition and section formatting.

use crate::error::{Error, Result};

/// A pair of literal delimiter strings bracketing a managed section.
///
/// Markers are fixed per call site (e.g. one pair for endorsements, a
/// different pair for jokes). A document may carry several independent
/// marker pairs as long as their literals are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// Creates a marker pair from literal start and end delimiters.
    ///
    /// # Errors
    /// Returns `Error::EmptyMarker` if either delimiter is empty, and
    /// `Error::IdenticalMarkers` if both are the same string.
    ///
    /// # Example
    /// ```
    /// use readme_sections::MarkerPair;
    ///
    /// let markers = MarkerPair::new("<!-- JOKE:START -->", "<!-- JOKE:END -->").unwrap();
    /// assert_eq!(markers.start(), "<!-- JOKE:START -->");
    /// ```
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() || end.is_empty() {
            return Err(Error::EmptyMarker);
        }
        if start == end {
            return Err(Error::IdenticalMarkers { marker: start });
        }

        Ok(Self { start, end })
    }

    /// The opening delimiter literal.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The closing delimiter literal.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Renders a complete section: opening marker, body, closing marker,
    /// each separated by a single newline.
    pub fn render_section(&self, body: &str) -> String {
        format!("{}\n{}\n{}", self.start, body, self.end)
    }
}
