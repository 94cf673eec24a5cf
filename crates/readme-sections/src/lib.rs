//! Marker-delimited section reconciliation for README Manager.
//!
//! This crate owns the one engineered behavior of the tool: given the full
//! text of a document, a pair of literal HTML-comment markers, and freshly
//! rendered replacement content, compute the updated document text.
//!
//! Managed sections look like:
//!
//! ```text
//! <!-- JOKE:START -->
//! content
//! <!-- JOKE:END -->
//! ```
//!
//! Reconciliation decides between three outcomes: replace an existing
//! section in place, append a new section at the end of the document, or
//! report that nothing changed because the stored body already matches the
//! rendered content (modulo surrounding whitespace).
//!
//! Everything here is pure string transformation. File and network I/O live
//! in the `readme-fs` and `readme-sources` crates.

pub mod diff;
pub mod error;
pub mod marker;
pub mod reconcile;

pub use diff::unified_diff;
pub use error::{Error, Result};
pub use marker::MarkerPair;
pub use reconcile::{ReconcileAction, Reconciliation, Section, find_section, reconcile};
