use thiserror::Error;

/// Editor failure taxonomy. Every variant is recoverable: the operation is
/// rejected, the ring is left untouched and the session stays usable.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EditorError {
    #[error("a polygon must keep at least 3 vertices")]
    MinVertices,
    #[error("no vertex is selected")]
    NoSelection,
    #[error("vertex index {index} out of range for ring of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no polygon has been drawn")]
    MissingGeometry,
    #[error("malformed geometry: {0}")]
    MalformedGeometry(&'static str),
    #[error("coordinates must be finite")]
    NonFinite,
}
