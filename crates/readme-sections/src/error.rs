//! Error types for readme-sections

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Section markers must not be empty")]
    EmptyMarker,

    #[error("Start and end markers must differ: {marker}")]
    IdenticalMarkers { marker: String },
}
