//! Error types for the editor surfaces.

use thiserror::Error;

/// Failure of a single edit attempt at the text boundary.
///
/// Both variants are recoverable: the caller's prior document state is never
/// touched when a commit fails.
#[derive(Debug, Error)]
pub enum EditError {
    /// The current document text is not valid JSON.
    #[error("MALFORMED_DOCUMENT: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    /// A path argument is not a valid JSON array of string/integer segments.
    #[error("MALFORMED_PATH: {0}")]
    MalformedPath(#[source] serde_json::Error),
}

/// Failure reported by a single document sink.
///
/// Sinks are best-effort: a failing sink is logged and skipped, the primary
/// mutation is never rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SinkError(pub String);

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        SinkError(message.into())
    }
}
