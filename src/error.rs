use thiserror::Error;

/// Errors produced by the annotation model and the segmentation pipeline.
///
/// Structural variants (`DuplicateLayer`, `LayerNotFound`, `OffsetOutOfRange`)
/// indicate a misbehaving detector or a misconfigured pipeline; `Rule` wraps
/// an error internal to a single rule and is isolated by the orchestrator.
#[derive(Error, Debug)]
pub enum Error {
    /// A span was constructed with `start` past `end`.
    #[error("invalid span: start {start} exceeds end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// A detector tried to register a layer name that is already taken.
    #[error("annotation layer already exists: {0}")]
    DuplicateLayer(String),

    /// A layer was queried before any detector produced it.
    #[error("annotation layer not found: {0}")]
    LayerNotFound(String),

    /// An annotation points past the end of the document.
    #[error("annotation span [{start}, {end}) in layer {layer} exceeds document length {len}")]
    OffsetOutOfRange {
        layer: String,
        start: usize,
        end: usize,
        len: usize,
    },

    /// A rule-internal failure (pattern compilation, offset bookkeeping).
    #[error("rule error: {0}")]
    Rule(String),
}

/// Result type for annotation and segmentation operations.
pub type Result<T> = std::result::Result<T, Error>;
